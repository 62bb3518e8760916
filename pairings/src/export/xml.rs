//! XML shape of the tournament export and its normalization.
//!
//! Collections such as `players/player` hold one or many elements depending on
//! the tournament. Every repeated element is read into a `Vec` here so nothing
//! past this module looks at how many elements the document actually had.

use super::errors::{MIN_SOURCE_LEN, NotReady};
use crate::tournament::{Match, Player, Round, RoundNumber, Tournament};
use log::warn;
use quick_xml::{Reader, events::Event};
use serde::Deserialize;

/// Name of the document root
pub const ROOT_ELEMENT: &str = "tournament";

#[derive(Debug, Deserialize)]
struct TournamentXml {
    data: Option<DataXml>,
    players: Option<PlayersXml>,
    pods: Option<PodsXml>,
}

#[derive(Debug, Deserialize)]
struct DataXml {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayersXml {
    #[serde(default)]
    player: Vec<PlayerXml>,
}

#[derive(Debug, Deserialize)]
struct PlayerXml {
    #[serde(rename = "@userid")]
    userid: Option<String>,
    firstname: Option<String>,
    lastname: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PodsXml {
    #[serde(default)]
    pod: Vec<PodXml>,
}

#[derive(Debug, Deserialize)]
struct PodXml {
    rounds: Option<RoundsXml>,
}

#[derive(Debug, Deserialize)]
struct RoundsXml {
    #[serde(default)]
    round: Vec<RoundXml>,
}

#[derive(Debug, Deserialize)]
struct RoundXml {
    #[serde(rename = "@number")]
    number: Option<String>,
    matches: Option<MatchesXml>,
}

#[derive(Debug, Deserialize)]
struct MatchesXml {
    #[serde(rename = "match", default)]
    entries: Vec<MatchXml>,
}

#[derive(Debug, Deserialize)]
struct MatchXml {
    #[serde(rename = "@tablenumber")]
    table_attr: Option<String>,
    #[serde(rename = "tablenumber")]
    table_elem: Option<String>,
    player1: Option<SeatXml>,
    player2: Option<SeatXml>,
}

#[derive(Debug, Deserialize)]
struct SeatXml {
    #[serde(rename = "@userid")]
    userid: Option<String>,
}

/// Strip surrounding whitespace and a byte-order mark, rejecting near-empty exports.
pub fn trim_source(source: &str) -> Result<&str, NotReady> {
    let trimmed = source.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let len = trimmed.chars().count();
    if len < MIN_SOURCE_LEN {
        return Err(NotReady::TooShort { len });
    }
    Ok(trimmed)
}

/// Parse an export into a [`Tournament`].
///
/// Fails with [`NotReady`] when the document is malformed, is not rooted at
/// `tournament`, or lacks players or rounds.
pub fn parse_export(source: &str) -> Result<Tournament, NotReady> {
    let source = trim_source(source)?;

    let root = root_element(source)?;
    if root != ROOT_ELEMENT {
        return Err(NotReady::UnexpectedRoot(root));
    }

    let raw: TournamentXml =
        quick_xml::de::from_str(source).map_err(|e| NotReady::Malformed(e.to_string()))?;

    let tournament = normalize(raw);
    if tournament.players.is_empty() {
        return Err(NotReady::NoPlayers);
    }
    if tournament.rounds.is_empty() {
        return Err(NotReady::NoRounds);
    }
    Ok(tournament)
}

/// Local name of the first element in the document
fn root_element(source: &str) -> Result<String, NotReady> {
    let mut reader = Reader::from_str(source);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(NotReady::Malformed("no root element".to_string())),
            Ok(_) => {}
            Err(e) => return Err(NotReady::Malformed(e.to_string())),
        }
    }
}

fn normalize(raw: TournamentXml) -> Tournament {
    let name = raw.data.and_then(|d| d.name).unwrap_or_default();

    let players = raw
        .players
        .map(|p| p.player)
        .unwrap_or_default()
        .into_iter()
        .filter_map(normalize_player)
        .collect();

    let rounds = raw
        .pods
        .map(|p| p.pod)
        .unwrap_or_default()
        .into_iter()
        .flat_map(|pod| pod.rounds.map(|r| r.round).unwrap_or_default())
        .filter_map(normalize_round)
        .collect();

    Tournament {
        name,
        players,
        rounds,
    }
}

fn normalize_player(raw: PlayerXml) -> Option<Player> {
    let Some(id) = raw.userid else {
        warn!(
            "Skipping player without userid: {} {}",
            raw.firstname.as_deref().unwrap_or_default(),
            raw.lastname.as_deref().unwrap_or_default()
        );
        return None;
    };
    Some(Player {
        id,
        first_name: raw.firstname.unwrap_or_default(),
        last_name: raw.lastname.unwrap_or_default(),
    })
}

fn normalize_round(raw: RoundXml) -> Option<Round> {
    let number = match raw.number.as_deref().map(str::trim).map(str::parse::<RoundNumber>) {
        Some(Ok(n)) => n,
        Some(Err(_)) | None => {
            warn!("Skipping round with unusable number {:?}", raw.number);
            return None;
        }
    };
    let matches = raw
        .matches
        .map(|m| m.entries)
        .unwrap_or_default()
        .into_iter()
        .map(normalize_match)
        .collect();
    Some(Round { number, matches })
}

fn normalize_match(raw: MatchXml) -> Match {
    Match {
        table: raw.table_attr.or(raw.table_elem).unwrap_or_default(),
        player1: raw.player1.and_then(|s| s.userid),
        player2: raw.player2.and_then(|s| s.userid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_OF_EACH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<tournament>
  <data><name>Puchar Wiosny</name></data>
  <players>
    <player userid="1"><firstname>Anna</firstname><lastname>Kowalska</lastname></player>
  </players>
  <pods>
    <pod>
      <rounds>
        <round number="1">
          <matches>
            <match tablenumber="5"><player1 userid="1"/><player2 userid="2"/></match>
          </matches>
        </round>
      </rounds>
    </pod>
  </pods>
</tournament>"#;

    #[test]
    fn test_single_elements_become_one_element_lists() {
        let t = parse_export(ONE_OF_EACH).unwrap();
        assert_eq!(t.name, "Puchar Wiosny");
        assert_eq!(t.players, vec![Player::new("1", "Anna", "Kowalska")]);
        assert_eq!(t.rounds.len(), 1);
        assert_eq!(t.rounds[0].matches, vec![Match::new("5", "1", "2")]);
    }

    #[test]
    fn test_many_elements_keep_document_order() {
        let xml = r#"<tournament>
  <players>
    <player userid="1"><firstname>A</firstname><lastname>A</lastname></player>
    <player userid="2"><firstname>B</firstname><lastname>B</lastname></player>
    <player userid="3"><firstname>C</firstname><lastname>C</lastname></player>
  </players>
  <pods><pod><rounds>
    <round number="2"><matches>
      <match tablenumber="1"><player1 userid="1"/><player2 userid="2"/></match>
      <match tablenumber="2"><player1 userid="3"/><player2 userid="1"/></match>
    </matches></round>
    <round number="1"/>
  </rounds></pod></pods>
</tournament>"#;
        let t = parse_export(xml).unwrap();
        let ids: Vec<_> = t.players.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(t.rounds.len(), 2);
        assert_eq!(t.rounds[0].number, 2);
        assert_eq!(t.rounds[0].matches.len(), 2);
        assert!(t.rounds[1].matches.is_empty());
    }

    #[test]
    fn test_rounds_from_every_pod_are_concatenated() {
        let xml = r#"<tournament>
  <players><player userid="1"/></players>
  <pods>
    <pod><rounds><round number="1"/></rounds></pod>
    <pod><rounds><round number="3"/><round number="2"/></rounds></pod>
  </pods>
</tournament>"#;
        let t = parse_export(xml).unwrap();
        let numbers: Vec<_> = t.rounds.iter().map(|r| r.number).collect();
        assert_eq!(numbers, [1, 3, 2]);
    }

    #[test]
    fn test_table_number_falls_back_to_child_element() {
        let xml = r#"<tournament>
  <players><player userid="1"/></players>
  <pods><pod><rounds><round number="1"><matches>
    <match><tablenumber>12</tablenumber><player1 userid="1"/></match>
    <match><player1 userid="1"/></match>
  </matches></round></rounds></pod></pods>
</tournament>"#;
        let t = parse_export(xml).unwrap();
        let matches = &t.rounds[0].matches;
        assert_eq!(matches[0].table, "12");
        assert_eq!(matches[0].player2, None);
        assert_eq!(matches[1].table, "");
    }

    #[test]
    fn test_missing_names_default_to_empty() {
        let xml = r#"<tournament>
  <players><player userid="4"><lastname>Nowak</lastname></player></players>
  <pods><pod><rounds><round number="1"/></rounds></pod></pods>
</tournament>"#;
        let t = parse_export(xml).unwrap();
        assert_eq!(t.name, "");
        assert_eq!(t.players[0].first_name, "");
        assert_eq!(t.players[0].last_name, "Nowak");
    }

    #[test]
    fn test_player_without_id_is_skipped() {
        let xml = r#"<tournament>
  <players>
    <player><firstname>Ghost</firstname></player>
    <player userid="2"><firstname>Jan</firstname><lastname>Nowak</lastname></player>
  </players>
  <pods><pod><rounds><round number="1"/></rounds></pod></pods>
</tournament>"#;
        let t = parse_export(xml).unwrap();
        assert_eq!(t.players, vec![Player::new("2", "Jan", "Nowak")]);
    }

    #[test]
    fn test_round_with_bad_number_is_skipped() {
        let xml = r#"<tournament>
  <players><player userid="1"/></players>
  <pods><pod><rounds>
    <round number="x"/>
    <round number=" 4 "/>
    <round/>
  </rounds></pod></pods>
</tournament>"#;
        let t = parse_export(xml).unwrap();
        let numbers: Vec<_> = t.rounds.iter().map(|r| r.number).collect();
        assert_eq!(numbers, [4]);
    }

    #[test]
    fn test_missing_players_is_not_ready() {
        let xml = r#"<tournament><data><name>T</name></data>
  <pods><pod><rounds><round number="1"/></rounds></pod></pods>
</tournament>"#;
        assert_eq!(parse_export(xml), Err(NotReady::NoPlayers));
    }

    #[test]
    fn test_empty_players_container_is_not_ready() {
        let xml = r#"<tournament><players></players>
  <pods><pod><rounds><round number="1"/></rounds></pod></pods>
</tournament>"#;
        assert_eq!(parse_export(xml), Err(NotReady::NoPlayers));
    }

    #[test]
    fn test_missing_pods_is_not_ready() {
        let xml = r#"<tournament><players><player userid="1"/></players></tournament>"#;
        assert_eq!(parse_export(xml), Err(NotReady::NoRounds));
    }

    #[test]
    fn test_pod_without_rounds_is_not_ready() {
        let xml = r#"<tournament><players><player userid="1"/></players><pods><pod/></pods></tournament>"#;
        assert_eq!(parse_export(xml), Err(NotReady::NoRounds));
    }

    #[test]
    fn test_wrong_root_is_not_ready() {
        let xml = r#"<league><players><player userid="1"/></players></league>"#;
        assert_eq!(
            parse_export(xml),
            Err(NotReady::UnexpectedRoot("league".to_string()))
        );
    }

    #[test]
    fn test_malformed_xml_is_not_ready() {
        let xml = r#"<tournament><players><player userid="1"></players>"#;
        assert!(matches!(parse_export(xml), Err(NotReady::Malformed(_))));
    }

    #[test]
    fn test_trim_source_rejects_short_input() {
        assert_eq!(trim_source(""), Err(NotReady::TooShort { len: 0 }));
        assert_eq!(trim_source("   \n\t "), Err(NotReady::TooShort { len: 0 }));
        assert_eq!(trim_source("\u{feff}<a/>"), Err(NotReady::TooShort { len: 4 }));
        assert_eq!(trim_source("  <tournament/>  "), Ok("<tournament/>"));
    }
}

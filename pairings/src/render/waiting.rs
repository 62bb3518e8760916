//! Placeholder page published while the export holds no usable data.

/// Complete waiting document
pub const WAITING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pl">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Oczekiwanie na dane</title>
  <style>
    body {
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      display: flex;
      justify-content: center;
      align-items: center;
      min-height: 100vh;
      margin: 0;
      background-color: #f2f2f2;
      color: #333;
      text-align: center;
      padding: 20px;
    }
    .message {
      background: white;
      padding: 30px 20px;
      border-radius: 10px;
      box-shadow: 0 0 10px rgba(0,0,0,0.1);
    }
    h1 {
      font-size: 1.6em;
    }
  </style>
</head>
<body>
  <div class="message">
    <h1>Oczekiwanie na dane turniejowe...</h1>
    <p>Plik XML jest pusty lub jeszcze nie został wygenerowany.</p>
  </div>
</body>
</html>
"#;

/// The waiting document
pub fn render_waiting() -> &'static str {
    WAITING_PAGE
}

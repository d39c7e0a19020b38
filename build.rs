use dotenvy::dotenv;

// (key, fallback used when neither .env nor the environment sets it)
const CONFIG_KEYS: [(&str, &str); 7] = [
  ("APP_NAME", "Trading Academy"),
  ("DEFAULT_LANGUAGE", "en"),
  ("SUPPORT_EMAIL", "support@trading-academy.example"),
  ("COPYRIGHT_HOLDER", "Trading Academy"),
  ("ANNUAL_DISCOUNT_PERCENT", "20"),
  ("DEMO_STUDENT_ID", "1"),
  ("DEMO_TEACHER_ID", "1"),
];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // .env is optional here, every key has a fallback
  let _ = dotenv();

  for (key, fallback) in CONFIG_KEYS {
    println!("cargo::rerun-if-env-changed={}", key);
    let value = std::env::var(key).unwrap_or_else(|_| fallback.to_string());
    println!("cargo::rustc-env={}={}", key, value);
  }
}

use conflux_patterns_rs::confine;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

  let add = |a: i32, b: i32| a + b;
  let fns: Vec<Box<dyn FnOnce() -> i32 + Send>> =
    vec![Box::new(move || add(2, 3)), Box::new(move || add(4, 5)), Box::new(move || add(6, 7))];

  let mut results = confine(fns);
  while let Some(value) = results.recv().await {
    println!("value: {value}");
  }
}

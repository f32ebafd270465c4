use conflux_patterns_rs::{Context, repeat, take};

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

  let ctx = Context::new();
  let mut values = take(&ctx, repeat(&ctx, vec![1, 2, 3]), 42);
  while let Some(value) = values.recv().await {
    print!("{value} ");
  }
  println!("done");
  ctx.cancel();
}

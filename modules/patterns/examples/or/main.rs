use std::time::{Duration, Instant};

use conflux_patterns_rs::{Stream, StreamConfig, or};

fn close_after(after: Duration) -> Stream<()> {
  let (sender, signal) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    tokio::time::sleep(after).await;
    drop(sender);
  });
  signal
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

  let start = Instant::now();
  let done = or(vec![
    close_after(Duration::from_secs(60)),
    close_after(Duration::from_secs(1)),
    close_after(Duration::from_secs(3600)),
    close_after(Duration::from_secs(12)),
  ])
  .ok_or_else(|| anyhow::anyhow!("no done signals"))?;
  done.collect().await;

  println!("done after {:?}", start.elapsed());
  Ok(())
}

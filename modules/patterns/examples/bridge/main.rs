use conflux_patterns_rs::{Context, Stream, StreamConfig, bridge};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();

  let (sender, streams) = Stream::channel(&StreamConfig::default());
  tokio::spawn(async move {
    for i in 0..10 {
      let (inner_sender, inner) = Stream::channel(&StreamConfig::new(1)?);
      inner_sender.try_send(i)?;
      drop(inner_sender);
      sender.send(inner).await?;
    }
    anyhow::Ok(())
  });

  let mut values = bridge(&Context::new(), streams);
  while let Some(value) = values.recv().await {
    print!("{value} ");
  }
  println!();
  Ok(())
}

use std::time::Instant;

use anyhow::Result;

static INPUT_FILE: &str = "cps.csv";
static OUTPUT_FILE: &str = "data_prep.txt";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let start_time = Instant::now();

    school_data_prep::run(INPUT_FILE, OUTPUT_FILE).await?;

    println!("report written to {} in {:?}", OUTPUT_FILE, start_time.elapsed());
    Ok(())
}

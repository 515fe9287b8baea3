mod settings;
mod terminal;

use anyhow::Result;
use passgen::{Pool, Rules, pass, rand, strength};

use settings::Settings;

const SAMPLE: &str = "Abc123!";

fn main() -> Result<()> {
    #[cfg(target_os = "linux")]
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let settings = Settings::from_env();
    env_logger::Builder::new()
        .parse_filters(&settings.log_filter)
        .init();
    log::debug!("entropy source: {}", rand::entropy_source());

    let mut rng = rand::csprng();

    println!("{}", terminal::header("Password Generator"));

    log_pool("simple", Pool::simple(), pass::SIMPLE_LENGTH);
    println!("Simple: {}", pass::generate_simple(&mut rng));

    log_pool("secure", Pool::secure(), pass::SECURE_LENGTH);
    println!("Secure: {}", pass::generate_secure(&mut rng));

    let rules = Rules::new(10, true, true, false);
    log_pool("rules", &rules.pool()?, rules.length);
    let with_rules = pass::generate_with_rules(
        &mut rng,
        rules.length,
        rules.letters,
        rules.digits,
        rules.symbols,
    )?;
    println!("With rules: {with_rules}");

    let verdict = strength::classify(SAMPLE);
    log::debug!("score of '{SAMPLE}': {}/{}", strength::score(SAMPLE), strength::MAX_SCORE);
    println!(
        "Strength of '{SAMPLE}': {}",
        terminal::paint_verdict(verdict, settings.color)
    );

    Ok(())
}

fn log_pool(name: &str, pool: &Pool, length: usize) {
    log::debug!(
        "{name}: {length} chars from a pool of {} ({:.1} bits)",
        pool.len(),
        pool.entropy_bits(length)
    );
}

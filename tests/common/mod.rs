#![allow(dead_code)]

use std::env;

use rand::SeedableRng;

/// 103 bytes of ASCII text.
pub const TEXT: &str = "Hello there!  How're you doing?  It's a fine day, \
                        isn't it?  Aren't you glad we're alive?  \
                        Hello again!";

pub const LIPSUM: &str = "Lorem ipsum dolor sit amet, consectetur \
                          adipiscing elit, sed do eiusmod tempor \
                          incididunt ut labore et dolore magna aliqua.";

#[track_caller]
pub fn rng() -> impl rand::Rng {
    let seed = seed();
    println!("SEED: {seed:?}");
    rand_chacha::ChaChaRng::seed_from_u64(seed)
}

#[track_caller]
fn seed() -> u64 {
    match env::var("SEED") {
        Ok(seed) => seed.parse().expect("couldn't parse $SEED"),
        Err(env::VarError::NotPresent) => rand::random(),
        Err(env::VarError::NotUnicode(seed)) => {
            panic!("$SEED contained invalid unicode: {seed:?}")
        },
    }
}

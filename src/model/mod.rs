pub mod category;
pub mod confusion;
pub mod record;
pub mod render_config;
pub mod scoring;
pub mod tally;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;

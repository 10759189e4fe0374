pub mod errors;
pub mod db;
pub mod order;

#[cfg(test)]
mod tests;

pub mod export;
pub mod ledger;

#[cfg(test)]
mod ledger_test;

mod test_deposits;
mod test_withdrawals;

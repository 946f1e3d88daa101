#[cfg(test)]
mod test_index;

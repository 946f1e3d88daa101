#[cfg(test)]
mod test_context;
#[cfg(test)]
mod test_providers;
#[cfg(test)]
mod test_tables;

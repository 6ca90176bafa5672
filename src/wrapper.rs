pub mod http;

#[cfg(test)]
pub mod test_server;

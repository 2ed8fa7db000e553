pub mod domain;
pub mod errors;
pub mod pet_store_service;

#[cfg(test)]
mod test_support;

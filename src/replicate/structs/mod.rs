pub mod replicate_response;

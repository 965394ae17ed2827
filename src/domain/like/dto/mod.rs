pub mod like_request;

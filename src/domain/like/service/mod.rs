pub mod like_service;

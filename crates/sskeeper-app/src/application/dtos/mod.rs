mod user_dto;

pub use user_dto::{CreateUserInput, UserDto, UserIdDto};

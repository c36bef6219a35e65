mod responses;

pub use responses::GreetingResponse;

#[cfg(test)]
pub use responses::GREETING_MESSAGE;

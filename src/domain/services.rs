use crate::domain::ports::Greeter;

pub const GREETING: &str = "Hello, world";

/// Greeting business logic. Localisation or other strategies plug in here
/// without touching the routes.
#[derive(Debug, Default, Clone, Copy)]
pub struct HelloService;

impl HelloService {
    pub fn new() -> Self {
        Self
    }
}

impl Greeter for HelloService {
    fn greet(&self) -> String {
        GREETING.to_string()
    }
}

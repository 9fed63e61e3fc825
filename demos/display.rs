use std::fmt::{self, Display};

use base36::{Base36, STD};

struct DisplayAdapter<'c> {
    value: i64,
    codec: &'c Base36,
}

impl<'c> DisplayAdapter<'c> {
    fn new(value: i64, codec: &'c Base36) -> Self {
        Self { value, codec }
    }
}

impl<'c> Display for DisplayAdapter<'c> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.codec.encode_into(self.value, f)
    }
}

fn main() {
    let id = 1337331;
    let encoded = STD.encode(id);
    let adapter = DisplayAdapter::new(id, &STD);
    let other = format!("{}", adapter);
    println!("{} / {}", encoded, other);
}

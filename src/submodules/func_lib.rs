use std::io::Write;

use serde::Serialize;

pub fn write_json<T: Serialize + ?Sized>(item: &T, filename: &str) -> std::io::Result<()> {
    let mut file = std::fs::File::create(filename)?;
    let json = serde_json::to_string(item)?;
    file.write_all(json.as_bytes())
}

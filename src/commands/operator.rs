use anyhow::Result;

use super::Session;
use crate::shell::display;

pub fn main(session: &Session) -> Result<()> {
    let props = session.op.properties();
    if session.json {
        println!("{}", serde_json::to_string(&props)?);
    } else {
        print!("{}", display::operator(&props));
    }
    Ok(())
}

//! Guided license selection in the manner of choosealicense.com.

use crate::error::Result;

use super::{Prompt, UserInterface};

/// Menu shown before the guided choice.
pub const CHOOSE_TEXT: &str = "\
Choose LICENSE like http://choosealicense.com/

  Choosing an OSS license doesn't need to be scary

Which of the following best describes your situation?

  1) I want it simple and permissive.

    The MIT License is a permissive license that is short and to the
    point. It lets people do anything they want with your code as long as they
    provide attribution back to you and don't hold you liable.
    e.g., jQuery, Rails

  2) I'm concerned about patents.

    The Apache License (apache-2.0) is a permissive license similar to the MIT License,
    but also provides an express grant of patent rights from contributors to users.
    e.g., Apache, SVN, NuGet

  3) I care about sharing improvements.

    The GPL V2 (gpl-2.0) or GPL V3 (gpl-3.0) is a copyleft license that requires
    anyone who distributes your code or a derivative work to make the source available under
    the same terms. V3 is similar to V2, but further restricts use in hardware that forbids
    software alterations.
    e.g., Linux, Git, WordPress

  4) I want more choices.
";

const VERSION_TEXT: &str = "
Which version do you want?
  1) V2
  2) V3";

/// Ask the operator to pick a license through the guided menu.
///
/// Returns the license key, or `None` when the operator wants the full
/// catalog list instead.
pub fn choose(ui: &mut dyn UserInterface) -> Result<Option<String>> {
    ui.message(CHOOSE_TEXT);
    let situation = ask(ui, "situation", 4)?;

    let version = if situation == 3 {
        ui.message(VERSION_TEXT);
        Some(ask(ui, "gpl_version", 2)?)
    } else {
        None
    };

    let key = match (situation, version) {
        (1, None) => Some("mit"),
        (2, None) => Some("apache-2.0"),
        (3, Some(1)) => Some("gpl-2.0"),
        (3, Some(2)) => Some("gpl-3.0"),
        (4, None) => None,
        (s, v) => unreachable!("menu selection out of range: {} / {:?}", s, v),
    };
    Ok(key.map(String::from))
}

fn ask(ui: &mut dyn UserInterface, key: &str, max: usize) -> Result<usize> {
    let answer = ui.prompt(&Prompt::number(key, max, 1))?;
    Ok(answer.as_number().unwrap_or(1))
}

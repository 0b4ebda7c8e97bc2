//! Create a new project from a bundled template

use std::process::ExitCode;

use nyrenx::{exit, Config, TerminalPrompter};

/// Execute the create command
///
/// # Process
///
/// 1. **Template**: pick `typescript` or `javascript` (or take `--template`)
/// 2. **Metadata**: module type, then name, version, description, main,
///    keywords, author and license, each defaulting to the template's value
/// 3. **Gate**: optional extra libraries, overwrite warning, continue?
/// 4. **Files**: extract the template archive, write package.json
/// 5. **Install**: `<package manager> install [libraries]` in the new directory
///
/// Declining the gate stops before anything is written.
pub fn execute(config: &Config, template: Option<&str>) -> ExitCode {
    let mut prompter = TerminalPrompter::new();
    exit::finish(nyrenx::generate(config, &mut prompter, template))
}

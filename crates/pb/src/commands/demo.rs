//! `pb demo` -- a built-in session.

use anyhow::Result;

use crate::commands::run::execute;
use crate::context::RuntimeContext;

const DEMO_SCRIPT: &str = "\
# Three projects come in through the form.
add Website relaunch | Rebuild the marketing site | 3
add Quarterly report | Collect the numbers for Q3 | 1
add Onboarding guide | Write the new-hire handbook | 2

# The form turns this one away: the description is too short.
add Typo | tiny | 2

# Drag the relaunch over to Finished.
drag #1 finished

# Finish the guide, then reopen it.
move #3 finished
move #3 active
";

/// Execute the `pb demo` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    execute(ctx, DEMO_SCRIPT)
}

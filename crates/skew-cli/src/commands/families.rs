//! Handler for `skew families`.

use skew_audit::family::Family;
use skew_util::errors::SkewResult;

pub fn exec() -> SkewResult<()> {
    for family in Family::CHECK_ORDER {
        println!("{}:", family.label());
        let mut names: Vec<&str> = family.members().iter().copied().collect();
        names.sort_unstable();
        for name in names {
            println!("  {name}");
        }
        println!();
    }
    Ok(())
}

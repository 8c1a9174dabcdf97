//! Permit command handler for the CLI.

use skiphire_core::{parse_size_yards, PermitAssessment};

/// Assess the road permit rule for a skip size label and print the verdict.
///
/// # Errors
///
/// Returns an error if the size label does not start with a positive yard
/// count.
pub(crate) fn run_permit(size: &str) -> anyhow::Result<()> {
    let yards = parse_size_yards(size)?;
    let assessment = PermitAssessment::for_yards(yards);

    println!("{}", assessment.headline);
    println!("{}", assessment.summary);
    for note in assessment.notes {
        println!("  - {note}");
    }

    Ok(())
}

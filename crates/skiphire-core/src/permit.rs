//! Road-placement permit rule.
//!
//! Skips of ten yards and above need a council permit before they can sit on
//! a public road. The rule reads only the yard count parsed from the size
//! token; see [`requires_permit`] for the `allowed_on_road` caveat.

use serde::Serialize;

use crate::skips::NormalizedSkip;
use crate::ValidationError;

/// Yard count at and above which road placement needs a council permit.
pub const PERMIT_THRESHOLD_YARDS: u32 = 10;

/// Permit outcome for one skip, with the customer-facing copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermitAssessment {
    pub required: bool,
    pub headline: &'static str,
    pub summary: &'static str,
    pub notes: &'static [&'static str],
}

impl PermitAssessment {
    /// Builds the assessment for a yard count.
    #[must_use]
    pub fn for_yards(yards: u32) -> Self {
        if yards >= PERMIT_THRESHOLD_YARDS {
            Self {
                required: true,
                headline: "Permit Required",
                summary: "Based on your selected skip size and intended placement location, \
                          you will need a permit from your local council. This is because \
                          skips placed on public roads typically require official permission.",
                notes: &[
                    "Permit costs typically range from £20-£50",
                    "Applications can take 3-5 working days to process",
                    "We can help arrange the permit for you",
                    "Alternative: Place skip on your private property",
                ],
            }
        } else {
            Self {
                required: false,
                headline: "No Permit Required",
                summary: "Great news! Based on your selected skip size and placement options, \
                          no permit is required. You can place this skip on your property or \
                          designated areas without additional permissions.",
                notes: &[
                    "No additional costs or waiting time",
                    "Skip can be delivered immediately upon booking",
                    "Suitable for private property placement",
                    "Road placement allowed for this skip size",
                ],
            }
        }
    }
}

/// Returns whether road placement of this skip needs a council permit.
///
/// True from [`PERMIT_THRESHOLD_YARDS`] upward. Only the parsed size is
/// consulted: the upstream `allowed_on_road` flag never enters the decision
/// even though it is semantically related. Whether it should gate the rule
/// is an open product question, so the observed behavior is kept and pinned
/// by test until someone confirms intent.
///
/// # Errors
///
/// Returns [`ValidationError::UnparseableSize`] when the skip's size token
/// has no usable yard count; the rule reports that rather than guessing.
pub fn requires_permit(skip: &NormalizedSkip) -> Result<bool, ValidationError> {
    Ok(skip.size_yards()? >= PERMIT_THRESHOLD_YARDS)
}

/// Evaluates the permit rule and bundles the outcome with its copy.
///
/// # Errors
///
/// Same failure mode as [`requires_permit`].
pub fn assess_permit(skip: &NormalizedSkip) -> Result<PermitAssessment, ValidationError> {
    Ok(PermitAssessment::for_yards(skip.size_yards()?))
}

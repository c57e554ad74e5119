use super::common::*;
use crate::scoring::{compute, Profile, MAX_RECOMMENDATIONS};

#[test]
fn deficits_lead_followed_by_target_and_driver() {
    let result = compute(&mixed_profile());
    let recs = &result.recommendations;

    assert_eq!(recs.len(), 4);
    assert!(recs[0].starts_with("Perception (PR)"));
    assert!(recs[0].contains("detracting 3.00 points"));
    assert!(recs[1].starts_with("Research & Professional Practice (RPC)"));
    assert!(recs[1].contains("detracting 2.25 points"));
    assert!(recs[2].starts_with("Prioritize Teaching, Learning & Resources (TLR)"));
    assert!(recs[2].contains("3.50 points"));
    assert!(recs[3].starts_with("Perception (PR) is currently the most significant driver"));
    assert!(recs[3].contains("-3.00 points"));
}

#[test]
fn five_deficits_crowd_out_target_and_driver() {
    let result = compute(&struggling_profile());
    let recs = &result.recommendations;

    assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    let keys: Vec<&str> = recs
        .iter()
        .map(|rec| {
            let open = rec.find('(').expect("metric key present");
            let close = rec.find(')').expect("metric key closed");
            &rec[open + 1..close]
        })
        .collect();
    assert_eq!(keys, ["TLR", "RPC", "GO", "PR", "OI"]);
    assert!(recs.iter().all(|rec| rec.contains("detracting")));
}

#[test]
fn ties_resolve_in_canonical_metric_order() {
    // GO and PR both sit exactly 1.50 below baseline; TLR is neutral.
    let result = compute(&Profile::new(55.0, 50.0, 50.0, 60.0, 35.0));
    let recs = &result.recommendations;

    assert_eq!(recs.len(), 4);
    assert!(recs[0].starts_with("Graduation Outcomes (GO)"));
    assert!(recs[1].starts_with("Perception (PR)"));
    assert!(recs[3].starts_with("Graduation Outcomes (GO) is currently"));
}

#[test]
fn strong_profiles_still_get_target_and_driver() {
    let result = compute(&Profile::uniform(100.0));
    let recs = &result.recommendations;

    assert_eq!(recs.len(), 2);
    assert!(recs[0].starts_with("Prioritize"));
    assert!(recs[1].contains("most significant driver"));
    assert!(recs[1].contains("+15.75 points"));
}

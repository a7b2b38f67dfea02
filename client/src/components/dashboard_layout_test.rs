use super::*;
use crate::net::types::{Authority, Citizen};

fn citizen(name: &str) -> CurrentUser {
    CurrentUser::Citizen(Citizen {
        id: 7,
        username: name.to_owned(),
        email: "ravi@example.com".to_owned(),
        is_verified: true,
        created_at: None,
        trust_score: Some(1.0),
    })
}

#[test]
fn authority_nav_has_dashboard_analytics_reports() {
    let labels: Vec<&str> = nav_items(Role::Authority).iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Dashboard", "Analytics", "Reports"]);
    assert_eq!(nav_items(Role::Authority)[0].href, "/authority/dashboard");
}

#[test]
fn citizen_nav_lists_five_destinations() {
    let hrefs: Vec<&str> = nav_items(Role::Citizen).iter().map(|i| i.href).collect();
    assert_eq!(hrefs, vec!["/map", "/report", "/community", "/how-cri-works", "/profile"]);
}

#[test]
fn active_item_requires_exact_path() {
    let map = nav_items(Role::Citizen)[0];
    assert!(is_active(&map, "/map"));
    assert!(!is_active(&map, "/map/extra"));
    assert!(!is_active(&map, "/"));
}

#[test]
fn guest_badge() {
    let (initial, name, email) = user_badge(None);
    assert_eq!(initial, "G");
    assert_eq!(name, "Guest User");
    assert_eq!(email, "citizen@fixity.in");
}

#[test]
fn user_badge_uppercases_initial() {
    let user = citizen("ravi");
    let (initial, name, email) = user_badge(Some(&user));
    assert_eq!(initial, "R");
    assert_eq!(name, "ravi");
    assert_eq!(email, "ravi@example.com");
}

#[test]
fn authority_badge_uses_authority_email() {
    let user = CurrentUser::Authority(Authority {
        id: 3,
        username: "pmc".to_owned(),
        email: "pmc@pune.gov".to_owned(),
        state: "Maharashtra".to_owned(),
        district: "Pune".to_owned(),
        block: String::new(),
        department: None,
        created_at: None,
    });
    assert_eq!(user_badge(Some(&user)), ("P".to_owned(), "pmc".to_owned(), "pmc@pune.gov".to_owned()));
}

#[test]
fn empty_username_falls_back_to_g() {
    let user = citizen("");
    assert_eq!(user_badge(Some(&user)).0, "G");
}

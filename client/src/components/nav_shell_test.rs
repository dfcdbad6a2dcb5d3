use super::*;

fn labels(items: &[NavItem]) -> Vec<&'static str> {
    items
        .iter()
        .map(|item| match item {
            NavItem::Link { label, .. } => *label,
            NavItem::Separator => "|",
            NavItem::Logout => "Logout",
        })
        .collect()
}

#[test]
fn logged_out_nav_hides_protected_links() {
    let items = nav_items(false);
    assert_eq!(labels(&items), vec!["Home", "Posts", "About", "|", "Login"]);
    assert!(!items.contains(&NavItem::Link { label: "New Post", href: "/newpost" }));
    assert!(!items.contains(&NavItem::Link { label: "Stats", href: "/stats" }));
    assert!(!items.contains(&NavItem::Logout));
}

#[test]
fn logged_in_nav_shows_protected_links_and_logout() {
    let items = nav_items(true);
    assert_eq!(labels(&items), vec!["Home", "Posts", "New Post", "About", "|", "Stats", "Logout"]);
    assert!(!items.contains(&NavItem::Link { label: "Login", href: "/login" }));
}

#[test]
fn nav_links_point_at_route_paths() {
    let hrefs: Vec<&str> = nav_items(true)
        .into_iter()
        .filter_map(|item| match item {
            NavItem::Link { href, .. } => Some(href),
            _ => None,
        })
        .collect();
    assert_eq!(hrefs, vec!["/", "/posts", "/newpost", "/about", "/stats"]);
}

#[test]
fn log_out_navigates_home_before_clearing_session() {
    let steps = std::cell::RefCell::new(Vec::new());
    log_out(
        |path| steps.borrow_mut().push(format!("navigate:{path}")),
        || steps.borrow_mut().push("clear".to_owned()),
    );
    assert_eq!(steps.into_inner(), vec!["navigate:/".to_owned(), "clear".to_owned()]);
}

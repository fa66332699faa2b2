use super::*;

#[test]
fn nav_link_class_marks_exact_match_active() {
    assert_eq!(nav_link_class("/about", "/about"), "nav__link nav__link--active");
    assert_eq!(nav_link_class("/about/", "/about"), "nav__link nav__link--active");
    assert_eq!(nav_link_class("/", "/"), "nav__link nav__link--active");
}

#[test]
fn nav_link_class_leaves_other_links_plain() {
    assert_eq!(nav_link_class("/book", "/"), "nav__link");
    assert_eq!(nav_link_class("/services", "/about"), "nav__link");
}

#[test]
fn nav_links_cover_public_pages() {
    let paths: Vec<&str> = NAV_LINKS.iter().map(|(p, _)| *p).collect();
    assert_eq!(paths, vec!["/", "/about", "/services", "/book", "/contact"]);
}

use embernav::{format_listing, related_files};
use insta::assert_snapshot;

#[test]
fn component_listing_renders_aligned_labels() {
    let candidates = related_files("app/components/widget.js");
    assert_snapshot!(format_listing(&candidates), @r"
    component-template  app/templates/components/widget.hbs
    component-style     app/styles/components/widget.scss
    ");
}

#[test]
fn route_listing_follows_table_order() {
    let candidates = related_files("app/routes/users/edit.js");
    assert_snapshot!(format_listing(&candidates), @r"
    controller-script    app/controllers/users/edit.js
    controller-template  app/templates/users/edit.hbs
    ");
}

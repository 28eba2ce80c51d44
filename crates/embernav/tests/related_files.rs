use embernav::{FileCategory, classify, related_files};

#[test]
fn component_script_end_to_end() {
    let classified = classify("app/components/widget.js").expect("classifies");
    assert_eq!(classified.category, FileCategory::ComponentScript);
    assert_eq!(classified.part, "widget");

    let candidates = related_files("app/components/widget.js");
    let paths: Vec<&str> = candidates.iter().map(|c| c.path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "app/templates/components/widget.hbs",
            "app/styles/components/widget.scss",
        ]
    );
}

#[test]
fn template_nesting_decides_the_category() {
    let nested = classify("app/templates/components/widget.hbs").expect("classifies");
    assert_eq!(nested.category, FileCategory::ComponentTemplate);

    let bare = classify("app/templates/widget.hbs").expect("classifies");
    assert_eq!(bare.category, FileCategory::ControllerTemplate);
    assert_eq!(bare.part, "widget");
}

#[test]
fn route_expansion_keeps_the_nested_part() {
    let candidates = related_files("app/routes/users/edit.js");
    let labels: Vec<&str> = candidates.iter().map(|c| c.category.key()).collect();
    assert_eq!(labels, ["controller-script", "controller-template"]);
    assert!(candidates.iter().all(|c| c.path.contains("users/edit")));
}

#[test]
fn unclassified_inputs_yield_nothing() {
    assert_eq!(classify("README.md"), None);
    assert!(related_files("README.md").is_empty());

    // Style files are synthesis-only targets; selecting one yields no
    // suggestions.
    assert_eq!(classify("app/styles/components/widget.scss"), None);
    assert!(related_files("app/styles/components/widget.scss").is_empty());
}

use super::*;
use pretty_assertions::assert_eq;
use zdoc_diagnostic::DiagnosticQueue;
use zdoc_typedefs::{TypedefDatabase, TypedefEntry};

fn names(class: &ClassDoc) -> Vec<&str> {
    class.methods.iter().map(|m| m.name.as_str()).collect()
}

#[test]
fn duplicate_overload_merges_into_first() {
    let mut class = ClassDoc::new("Cog");
    assert!(class.add_method(MethodDoc::new("Destroy").returning("void")));
    assert!(!class.add_method(
        MethodDoc::new("Destroy")
            .returning("void")
            .with_description("Destroys the object.")
    ));
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].description, "Destroys the object.");
}

#[test]
fn distinct_overloads_stay_grouped() {
    let mut class = ClassDoc::new("Cog");
    class.add_method(MethodDoc::new("Find").returning("Cog").with_parameter("n", "String"));
    class.add_method(MethodDoc::new("Attach").returning("void"));
    class.add_method(MethodDoc::new("Find").returning("Cog").with_parameter("id", "int"));
    assert_eq!(names(&class), vec!["Find", "Find", "Attach"]);

    class.sort();
    assert_eq!(names(&class), vec!["Attach", "Find", "Find"]);
    assert_eq!(class.methods[1].parameters[0].name, "n");
}

#[test]
fn description_for_skips_empty_overloads() {
    let mut class = ClassDoc::new("Cog");
    class.add_method(MethodDoc::new("Find").returning("Cog").with_parameter("n", "String"));
    class.add_method(
        MethodDoc::new("Find")
            .returning("Cog")
            .with_parameter("id", "int")
            .with_description("Finds a child."),
    );
    assert_eq!(class.description_for("Find"), Some("Finds a child."));
    assert_eq!(class.description_for("Missing"), None);
}

#[test]
fn description_outlives_the_queried_name() {
    let mut class = ClassDoc::new("Cog");
    class.add_method(MethodDoc::new("Find").returning("Cog").with_description("Finds a child."));
    let found = {
        let name = String::from("Find");
        class.description_for(&name)
    };
    assert_eq!(found, Some("Finds a child."));
}

#[test]
fn exceptions_attach_to_first_overload_once() {
    let mut class = ClassDoc::new("Cog");
    class.add_method(MethodDoc::new("Load").returning("void"));
    class.add_method(MethodDoc::new("Load").returning("void").with_parameter("p", "String"));
    let exception = ExceptionDoc {
        title: "Invalid".to_string(),
        message: "[variable]".to_string(),
    };
    assert!(class.add_exception("Load", exception.clone()));
    assert!(!class.add_exception("Load", exception.clone()));
    assert!(!class.add_exception("Save", exception));
    assert_eq!(class.methods[0].exceptions.len(), 1);
    assert!(class.methods[1].exceptions.is_empty());
}

#[test]
fn normalization_merges_overloads_spelled_through_typedefs() {
    let mut db = TypedefDatabase::new();
    let mut diags = DiagnosticQueue::new();
    db.insert(
        TypedefEntry::from_declaration(NamespacePath::from_names(["Zero"]), "Real", "typedef float Real"),
        &mut diags,
    );
    let typedefs = db.expand_all(&mut diags);

    let mut class = ClassDoc::new("Transform");
    class.namespace = NamespacePath::from_names(["Zero"]);
    class.methods.push(MethodDoc::new("Scale").returning("void").with_parameter("s", "Real"));
    class.methods.push(
        MethodDoc::new("Scale")
            .returning("void")
            .with_parameter("s", "float")
            .with_description("Scales uniformly."),
    );
    class.add_property(PropertyDoc::new("Size", "RealParam"));

    class.normalize_types(&typedefs);

    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].description, "Scales uniformly.");
    assert_eq!(class.properties[0].tokens.joined_text(), "float");
}

#[test]
fn properties_dedupe_by_name() {
    let mut class = ClassDoc::new("Cog");
    assert!(class.add_property(PropertyDoc::new("Name", "String")));
    assert!(!class.add_property(PropertyDoc::new("Name", "int")));
    assert_eq!(class.properties.len(), 1);
}

#[test]
fn event_lists_prune() {
    let mut class = ClassDoc::new("Cog");
    class.events_sent = vec!["b".into(), "a".into(), "b".into()];
    class.prune_events();
    assert_eq!(class.events_sent, vec!["a".to_string(), "b".to_string()]);
}

use crate::recreate_table;
use quarry::{Entity, Executor, Statement};

#[derive(Entity, Debug, Clone, PartialEq)]
struct Audit {
    #[quarry(name = "created_by")]
    author: String,
    revision: i32,
}

#[derive(Entity, Debug, Clone, PartialEq)]
#[quarry(table = "documents")]
struct Document {
    #[quarry(auto)]
    id: i64,
    title: String,
    #[quarry(flatten)]
    audit: Audit,
    #[quarry(skip)]
    cached: Option<String>,
}

pub(crate) fn embedded<E: Executor>(executor: &E) {
    recreate_table(
        executor,
        "documents",
        "create table documents (id integer primary key, title text, created_by text, revision integer)",
    );
    let document = Document {
        id: 0,
        title: "Notes".into(),
        audit: Audit {
            author: "alice".into(),
            revision: 3,
        },
        cached: Some("Never stored".into()),
    };
    let id = Statement::of::<Document>(executor)
        .insert(&document)
        .expect("Failed to insert the document");

    let found: Document = Statement::of::<Document>(executor)
        .filter_with("id = {}", &[&id])
        .find_one()
        .expect("Failed to find the document");
    assert_eq!(found.id, id);
    assert_eq!(found.title, "Notes");
    assert_eq!(found.audit, document.audit);
    assert_eq!(found.cached, None);

    let mut revised = found.clone();
    revised.audit.revision += 1;
    Statement::of::<Document>(executor)
        .filter_with("id = {}", &[&id])
        .update(&revised)
        .expect("Failed to update the document");
    let found: Document = Statement::of::<Document>(executor)
        .filter("created_by = 'alice'")
        .find_one()
        .expect("Failed to find the revised document");
    assert_eq!(found.audit.revision, 4);
}

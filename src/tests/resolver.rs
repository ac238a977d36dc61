//! Pipeline tests with the remote layer disabled: instructions resolve (or
//! fail to) through the local parser against an in-memory store.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use crate::db::{queries, Database};
use crate::resolver::{CommandResolver, Resolution, UNRESOLVED_MESSAGE};

fn local_only() -> (CommandResolver, Arc<Database>) {
    let db = Arc::new(Database::open_in_memory().expect("in-memory database"));
    (CommandResolver::new(None, db.clone()), db)
}

#[test]
fn word_numbers_resolve_locally_and_record_the_original_text() {
    tokio_test::block_on(async {
        let (resolver, db) = local_only();

        let resolution = resolver.resolve("Add five and three").await.unwrap();
        assert_eq!(resolution.message(), "The sum of 5.0 and 3.0 is 8.0.");

        let rows = queries::list_history(&db).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
        // The stored instruction is the user's text, not the normalized form.
        assert_eq!(rows[0].instruction, "Add five and three");
        assert_eq!(rows[0].result, "The sum of 5.0 and 3.0 is 8.0.");
    });
}

#[test]
fn compound_word_numbers_flow_through_the_pipeline() {
    tokio_test::block_on(async {
        let (resolver, _db) = local_only();

        let resolution = resolver.resolve("multiply twenty five and four").await.unwrap();
        assert_eq!(resolution.message(), "The product of 25.0 and 4.0 is 100.0.");
    });
}

#[test]
fn division_by_zero_is_recorded_like_any_other_result() {
    tokio_test::block_on(async {
        let (resolver, db) = local_only();

        let resolution = resolver.resolve("Divide 5 by 0").await.unwrap();
        assert_eq!(resolution.message(), "Error: Division by zero");

        let rows = queries::list_history(&db).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].result, "Error: Division by zero");
    });
}

#[test]
fn unrecognized_instruction_leaves_no_record() {
    tokio_test::block_on(async {
        let (resolver, db) = local_only();

        let resolution = resolver.resolve("what is the weather like").await.unwrap();
        assert!(matches!(resolution, Resolution::Unresolved));
        assert_eq!(resolution.message(), UNRESOLVED_MESSAGE);

        assert!(queries::list_history(&db).unwrap().is_empty());
    });
}

#[test]
fn missing_operands_leave_no_record() {
    tokio_test::block_on(async {
        let (resolver, db) = local_only();

        let resolution = resolver.resolve("add 2").await.unwrap();
        assert!(matches!(resolution, Resolution::Unresolved));
        assert!(queries::list_history(&db).unwrap().is_empty());
    });
}

#[test]
fn sequential_resolutions_accumulate_history_in_order() {
    tokio_test::block_on(async {
        let (resolver, db) = local_only();

        resolver.resolve("add 1 and 2").await.unwrap();
        resolver.resolve("subtract 10 and 4").await.unwrap();
        resolver.resolve("nonsense input").await.unwrap();
        resolver.resolve("multiply 3 and 3").await.unwrap();

        let rows = queries::list_history(&db).unwrap();
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(rows[2].instruction, "multiply 3 and 3");
        assert_eq!(rows[2].result, "The product of 3.0 and 3.0 is 9.0.");
    });
}

use crate::recreate_table;
use quarry::{Entity, Executor, Statement};

#[derive(Entity, Debug)]
#[quarry(table = "items")]
struct Item {
    id: i64,
    category: String,
}

#[derive(Entity, Debug)]
#[quarry(table = "items")]
struct Category {
    category: String,
}

pub(crate) fn paging<E: Executor>(executor: &E) {
    recreate_table(
        executor,
        "items",
        "create table items (id integer primary key, category text not null)",
    );
    for id in 1..=10 {
        Statement::of::<Item>(executor)
            .insert(&Item {
                id,
                category: if id % 2 == 0 { "even" } else { "odd" }.into(),
            })
            .expect("Failed to insert an item");
    }

    let ids = |statement: Statement<E>| {
        statement
            .find_many::<Item>()
            .expect("Failed to query the items")
            .into_iter()
            .map(|v| v.id)
            .collect::<Vec<_>>()
    };

    // Limit only
    assert_eq!(
        ids(Statement::of::<Item>(executor).sort("id").limit(3)),
        [1, 2, 3]
    );

    // Limit and offset
    assert_eq!(
        ids(Statement::of::<Item>(executor)
            .sort("id")
            .offset(2)
            .limit(3)),
        [3, 4, 5]
    );

    // Offset alone is not written
    assert_eq!(
        ids(Statement::of::<Item>(executor).sort("id").offset(4)).len(),
        10
    );

    // Descending
    assert_eq!(
        ids(Statement::of::<Item>(executor)
            .sort("id")
            .order("desc")
            .limit(2)),
        [10, 9]
    );

    // Single record keeps the offset
    let item: Item = Statement::of::<Item>(executor)
        .sort("id")
        .offset(4)
        .limit(100)
        .find_one()
        .expect("Failed to find the fifth item");
    assert_eq!(item.id, 5);

    // Filter and paging
    assert_eq!(
        ids(Statement::of::<Item>(executor)
            .filter("category = 'odd'")
            .sort("id")
            .offset(1)
            .limit(2)),
        [3, 5]
    );

    // Grouping, order by is written before group by so no sort here
    let mut categories = Statement::of::<Category>(executor)
        .group("category")
        .find_many::<Category>()
        .expect("Failed to group the items")
        .into_iter()
        .map(|v| v.category)
        .collect::<Vec<_>>();
    categories.sort();
    assert_eq!(categories, ["even", "odd"]);
}

use crate::recreate_table;
use quarry::{Entity, Executor, Statement};

#[derive(Entity, Debug, PartialEq)]
#[quarry(table = "members, teams")]
struct Membership {
    #[quarry(name = "members.name")]
    member: String,
    #[quarry(name = "teams.title")]
    team: String,
}

pub(crate) fn joined<E: Executor>(executor: &E) {
    recreate_table(
        executor,
        "members",
        "create table members (id integer primary key, name text not null, team_id integer not null)",
    );
    recreate_table(
        executor,
        "teams",
        "create table teams (id integer primary key, title text not null)",
    );
    executor
        .execute(
            "insert into teams (id, title) values (1, 'Red'), (2, 'Blue')",
            &[],
        )
        .expect("Failed to insert the teams");
    executor
        .execute(
            "insert into members (name, team_id) values ('Ann', 1), ('Ben', 2), ('Cat', 1)",
            &[],
        )
        .expect("Failed to insert the members");

    let memberships = Statement::of::<Membership>(executor)
        .filter("members.team_id = teams.id")
        .sort("members.name")
        .find_many::<Membership>()
        .expect("Failed to query the memberships");
    assert_eq!(
        memberships
            .iter()
            .map(|v| (v.member.as_str(), v.team.as_str()))
            .collect::<Vec<_>>(),
        [("Ann", "Red"), ("Ben", "Blue"), ("Cat", "Red")]
    );

    let count = Statement::of::<Membership>(executor)
        .filter("members.team_id = teams.id and teams.title = 'Red'")
        .count()
        .expect("Failed to count the memberships");
    assert_eq!(count, 2);
}

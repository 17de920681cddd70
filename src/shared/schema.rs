diesel::table! {
    tickets (id) {
        id -> Integer,
        title -> Text,
        description -> Text,
        status -> Text,
        created -> TimestamptzSqlite,
        updated -> TimestamptzSqlite,
    }
}

diesel::table! {
    comments (id) {
        id -> Integer,
        body -> Text,
        created -> TimestamptzSqlite,
        ticket_id -> Integer,
    }
}

diesel::joinable!(comments -> tickets (ticket_id));

diesel::allow_tables_to_appear_in_same_query!(tickets, comments);

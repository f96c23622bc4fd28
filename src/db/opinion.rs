use chrono::{Local, NaiveDateTime, SubsecRound};
use sea_orm::{entity::prelude::*, QueryOrder, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "opinion")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub create_at: NaiveDateTime,
    pub topic: String,
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new_from(topic: &str, content: &str, create_at: NaiveDateTime) -> Self {
        ActiveModel {
            create_at: Set(create_at),
            topic: Set(topic.to_string()),
            content: Set(content.to_string()),
            ..Default::default()
        }
    }
}

/// Inserts an opinion stamped with the current local time, to the microsecond.
pub async fn insert(conn: &DatabaseConnection, topic: &str, content: &str) -> anyhow::Result<Model> {
    let now = Local::now().naive_local().trunc_subsecs(6);
    insert_at(conn, topic, content, now).await
}

pub async fn insert_at(
    conn: &DatabaseConnection,
    topic: &str,
    content: &str,
    create_at: NaiveDateTime,
) -> anyhow::Result<Model> {
    let opinion = ActiveModel::new_from(topic, content, create_at)
        .insert(conn)
        .await?;

    Ok(opinion)
}

/// All opinions, newest first.
pub async fn list_recent(conn: &DatabaseConnection) -> anyhow::Result<Vec<Model>> {
    let opinions = Entity::find()
        .order_by_desc(Column::CreateAt)
        .order_by_desc(Column::Id)
        .all(conn)
        .await?;

    Ok(opinions)
}

use async_trait::async_trait;
use calc_sdk::Constant;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, ConnectionTrait as DbConnTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::error::DomainError;
use crate::domain::repo::ConstantsRepository;
use crate::infra::storage::db::db_err;
use crate::infra::storage::entity::{ActiveModel as ConstantAM, Column, Entity as ConstantEntity};

/// ORM-based implementation of the `ConstantsRepository` trait.
#[derive(Clone, Default)]
pub struct OrmConstantsRepository;

impl OrmConstantsRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConstantsRepository for OrmConstantsRepository {
    async fn find_by_name<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Vec<Constant>, DomainError> {
        let rows = ConstantEntity::find()
            .filter(Column::Name.eq(name))
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn upsert<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
        value: f64,
    ) -> Result<(), DomainError> {
        let m = ConstantAM {
            name: Set(name.to_owned()),
            value: Set(value),
        };

        ConstantEntity::insert(m)
            .on_conflict(
                OnConflict::column(Column::Name)
                    .update_column(Column::Value)
                    .to_owned(),
            )
            .exec_without_returning(conn)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<bool, DomainError> {
        let result = ConstantEntity::delete_many()
            .filter(Column::Name.eq(name))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn list_ordered<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Constant>, DomainError> {
        let rows = ConstantEntity::find()
            .order_by_asc(Column::Name)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct HierarchyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HierarchyRepository<'a, C> {
    /// Creates a new instance of [`HierarchyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the IDs of all direct children of a company, ordered by child ID
    pub async fn get_child_ids(&self, parent_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::CompanyHierarchy::find()
            .select_only()
            .column(entity::company_hierarchy::Column::ChildId)
            .filter(entity::company_hierarchy::Column::ParentId.eq(parent_id))
            .order_by_asc(entity::company_hierarchy::Column::ChildId)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Gets every edge where the company is either the parent or the child
    pub async fn get_edges_for_company(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::company_hierarchy::Model>, DbErr> {
        entity::prelude::CompanyHierarchy::find()
            .filter(
                Condition::any()
                    .add(entity::company_hierarchy::Column::ParentId.eq(company_id))
                    .add(entity::company_hierarchy::Column::ChildId.eq(company_id)),
            )
            .order_by_asc(entity::company_hierarchy::Column::Id)
            .all(self.db)
            .await
    }
}

use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, sea_query::OnConflict,
};
use uuid::Uuid;

use vendo_api_schema::{addresses, orders, profiles, users};
use vendo_domain::order::OrderStatus;
use vendo_domain::pagination::PageRequest;

use crate::domain::repository::{
    AddressRepository, OrderRepository, ProfileRepository, UserRepository,
};
use crate::domain::types::{Address, Order, Profile, User};
use crate::error::ApiServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create_with_profile(
        &self,
        user: &User,
        profile: &Profile,
    ) -> Result<(), ApiServiceError> {
        self.db
            .transaction::<_, (), sea_orm::DbErr>(|txn| {
                let user = user.clone();
                let profile = profile.clone();
                Box::pin(async move {
                    insert_user(txn, &user).await?;
                    insert_profile(txn, &profile).await?;
                    Ok(())
                })
            })
            .await
            .context("create user with profile")?;
        Ok(())
    }
}

async fn insert_user(txn: &DatabaseTransaction, user: &User) -> Result<(), sea_orm::DbErr> {
    users::ActiveModel {
        id: Set(user.id),
        name: Set(user.name.clone()),
        email: Set(user.email.clone()),
        password_hash: Set(user.password_hash.clone()),
        created_at: Set(user.created_at),
        updated_at: Set(user.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

async fn insert_profile(
    txn: &DatabaseTransaction,
    profile: &Profile,
) -> Result<(), sea_orm::DbErr> {
    profiles::ActiveModel {
        user_id: Set(profile.user_id),
        avatar_url: Set(profile.avatar_url.clone()),
        theme: Set(profile.theme.clone()),
        updated_at: Set(profile.updated_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ApiServiceError> {
        let model = profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find profile by user")?;
        Ok(model.map(profile_from_model))
    }

    async fn upsert(&self, profile: &Profile) -> Result<(), ApiServiceError> {
        let am = profiles::ActiveModel {
            user_id: Set(profile.user_id),
            avatar_url: Set(profile.avatar_url.clone()),
            theme: Set(profile.theme.clone()),
            updated_at: Set(profile.updated_at),
        };
        profiles::Entity::insert(am)
            .on_conflict(
                OnConflict::column(profiles::Column::UserId)
                    .update_columns([
                        profiles::Column::AvatarUrl,
                        profiles::Column::Theme,
                        profiles::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert profile")?;
        Ok(())
    }
}

fn profile_from_model(model: profiles::Model) -> Profile {
    Profile {
        user_id: model.user_id,
        avatar_url: model.avatar_url,
        theme: model.theme,
        updated_at: model.updated_at,
    }
}

// ── Address repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAddressRepository {
    pub db: DatabaseConnection,
}

impl AddressRepository for DbAddressRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Address>, ApiServiceError> {
        let model = addresses::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find address by user")?;
        Ok(model.map(address_from_model))
    }

    async fn upsert(&self, address: &Address) -> Result<(), ApiServiceError> {
        let am = addresses::ActiveModel {
            user_id: Set(address.user_id),
            full_name: Set(address.full_name.clone()),
            phone: Set(address.phone.clone()),
            street: Set(address.street.clone()),
            city: Set(address.city.clone()),
            state: Set(address.state.clone()),
            pincode: Set(address.pincode.clone()),
            country: Set(address.country.clone()),
            updated_at: Set(address.updated_at),
        };
        addresses::Entity::insert(am)
            .on_conflict(
                OnConflict::column(addresses::Column::UserId)
                    .update_columns([
                        addresses::Column::FullName,
                        addresses::Column::Phone,
                        addresses::Column::Street,
                        addresses::Column::City,
                        addresses::Column::State,
                        addresses::Column::Pincode,
                        addresses::Column::Country,
                        addresses::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert address")?;
        Ok(())
    }
}

fn address_from_model(model: addresses::Model) -> Address {
    Address {
        user_id: model.user_id,
        full_name: model.full_name,
        phone: model.phone,
        street: model.street,
        city: model.city,
        state: model.state,
        pincode: model.pincode,
        country: model.country,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list_by_user(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Order>, ApiServiceError> {
        let page = page.clamped();
        let models = orders::Entity::find()
            .filter(orders::Column::UserId.eq(user_id))
            .order_by_desc(orders::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list orders by user")?;
        models.into_iter().map(order_from_model).collect()
    }

    async fn find_by_id(&self, id: Uuid, user_id: Uuid) -> Result<Option<Order>, ApiServiceError> {
        let model = orders::Entity::find_by_id(id)
            .filter(orders::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find order by id")?;
        model.map(order_from_model).transpose()
    }

    async fn create(&self, order: &Order) -> Result<(), ApiServiceError> {
        order_active_model(order)
            .insert(&self.db)
            .await
            .context("create order")?;
        Ok(())
    }

    async fn create_if_absent(&self, order: &Order) -> Result<bool, ApiServiceError> {
        // ON CONFLICT DO NOTHING on the unique session id. Duplicate webhook
        // deliveries race here; the constraint decides the winner.
        let inserted = orders::Entity::insert(order_active_model(order))
            .on_conflict(
                OnConflict::column(orders::Column::CheckoutSessionId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("create order if absent")?;
        Ok(inserted > 0)
    }
}

fn order_active_model(order: &Order) -> orders::ActiveModel {
    orders::ActiveModel {
        id: Set(order.id),
        user_id: Set(order.user_id),
        amount: Set(order.amount),
        items: Set(order.items.clone()),
        status: Set(order.status.as_str().to_string()),
        checkout_session_id: Set(order.checkout_session_id.clone()),
        created_at: Set(order.created_at),
    }
}

fn order_from_model(model: orders::Model) -> Result<Order, ApiServiceError> {
    let status = OrderStatus::from_str_value(&model.status)
        .with_context(|| format!("unknown order status {:?}", model.status))?;
    Ok(Order {
        id: model.id,
        user_id: model.user_id,
        amount: model.amount,
        items: model.items,
        status,
        checkout_session_id: model.checkout_session_id,
        created_at: model.created_at,
    })
}

use std::collections::BTreeMap;

use async_trait::async_trait;

use docesabor_core::result::AppResult;
use docesabor_entity::account::Role;
use docesabor_entity::dashboard::{CategoryCount, CityCount, GeneralStats, StatusCount};
use docesabor_entity::order::OrderStatus;

use super::MemoryDatabase;
use crate::store::DashboardStore;

#[async_trait]
impl DashboardStore for MemoryDatabase {
    async fn general_stats(&self) -> AppResult<GeneralStats> {
        let tables = self.tables.lock().await;
        Ok(GeneralStats {
            clientes: tables
                .accounts
                .iter()
                .filter(|a| a.role == Role::Client)
                .count() as i64,
            bolos: tables.cakes.values().filter(|c| c.active).count() as i64,
            pedidos: tables.orders.len() as i64,
        })
    }

    async fn cakes_by_category(&self) -> AppResult<Vec<CategoryCount>> {
        let tables = self.tables.lock().await;
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for cake in tables.cakes.values().filter(|c| c.active) {
            if let Some(category) = tables.categories.get(&cake.category_id) {
                *counts.entry(category.name.clone()).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(categoria, num)| CategoryCount { categoria, num })
            .collect())
    }

    async fn customers_by_city(&self) -> AppResult<Vec<CityCount>> {
        let tables = self.tables.lock().await;
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for account in tables.accounts.iter().filter(|a| a.role == Role::Client) {
            if let Some(city) = &account.city {
                *counts.entry(city.clone()).or_default() += 1;
            }
        }
        Ok(counts
            .into_iter()
            .map(|(cidade, num)| CityCount { cidade, num })
            .collect())
    }

    async fn orders_by_status(&self) -> AppResult<Vec<StatusCount>> {
        let tables = self.tables.lock().await;
        Ok(OrderStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                num: tables.orders.values().filter(|o| o.status == status).count() as i64,
            })
            .filter(|c| c.num > 0)
            .collect())
    }
}

// Weapon catalogue endpoints: `/api/Weapon`.

use reqwest::StatusCode;

use crate::client::ArmoryClient;
use crate::error::Error;
use crate::types::{CreatedResponse, WeaponBody, WeaponResponse};

const WEAPONS: &str = "api/Weapon";

impl ArmoryClient {
    /// `GET /api/Weapon/{id}` -- a single weapon (200 only).
    pub async fn get_weapon(&self, id: u64) -> Result<WeaponResponse, Error> {
        let resp = self.get_raw(&format!("{WEAPONS}/{id}")).await?;
        Self::decode(resp, &[StatusCode::OK]).await
    }

    /// `GET /api/Weapon/{id}` -- `true` iff the server answers 200.
    /// The body is discarded.
    pub async fn weapon_exists(&self, id: u64) -> Result<bool, Error> {
        let resp = self.get_raw(&format!("{WEAPONS}/{id}")).await?;
        Ok(resp.status() == StatusCode::OK)
    }

    /// `GET /api/Weapon` -- every weapon, in server order.
    pub async fn list_weapons(&self) -> Result<Vec<WeaponResponse>, Error> {
        let resp = self.get_raw(WEAPONS).await?;
        Self::decode(resp, &[StatusCode::OK]).await
    }

    /// `POST /api/Weapon` -- returns the server-assigned id (201 only).
    pub async fn create_weapon(&self, body: &WeaponBody) -> Result<u64, Error> {
        let resp = self.post_raw(WEAPONS, body).await?;
        let created: CreatedResponse = Self::decode(resp, &[StatusCode::CREATED]).await?;
        Ok(created.id)
    }

    /// `PUT /api/Weapon/{id}` -- 200 or 204 counts as success.
    pub async fn update_weapon(&self, id: u64, body: &WeaponBody) -> Result<(), Error> {
        let resp = self.put_raw(&format!("{WEAPONS}/{id}"), body).await?;
        Self::expect_status(resp, &[StatusCode::OK, StatusCode::NO_CONTENT]).await?;
        Ok(())
    }

    /// `DELETE /api/Weapon/{id}` -- 200 or 204 counts as success.
    pub async fn delete_weapon(&self, id: u64) -> Result<(), Error> {
        let resp = self.delete_raw(&format!("{WEAPONS}/{id}")).await?;
        Self::expect_status(resp, &[StatusCode::OK, StatusCode::NO_CONTENT]).await?;
        Ok(())
    }
}

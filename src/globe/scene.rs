use super::orbit_class::DatasetEpoch;
use super::sampler::{RandomSource, ThreadRandom};
use super::satellite_field::SatelliteField;
use crate::event;
use crate::http_handler::{
    http_client::HTTPClient,
    http_request::{
        country_colors_get::CountryColorsRequest, request_common::NoBodyHTTPRequestType,
        satellite_dataset_get::SatelliteDatasetRequest,
    },
    http_response::{
        country_colors::CountryColorsResponse, response_common::ResponseError,
        satellite_dataset::SatelliteDataset,
    },
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Scene context for the satellite globe.
///
/// Owns the color palette, the currently displayed dataset and the placed
/// satellite field. Epoch switches are guarded by a per-switch
/// [`CancellationToken`]: issuing a new switch cancels the previous one, so a
/// stale fetch can never overwrite a newer dataset.
#[derive(Debug)]
pub struct GlobeScene {
    palette: CountryColorsResponse,
    field: SatelliteField,
    dataset: Option<SatelliteDataset>,
    epoch: DatasetEpoch,
    count_label: String,
    switch_guard: CancellationToken,
}

impl GlobeScene {
    /// Fetches palette and the default ("today") dataset and places the
    /// initial satellite field.
    pub async fn initialize(client: &HTTPClient) -> Result<GlobeScene, ResponseError> {
        let palette = CountryColorsRequest {}.send_request(client).await?;
        let dataset =
            SatelliteDatasetRequest::new(DatasetEpoch::Today).send_request(client).await?;
        Ok(Self::from_parts(palette, DatasetEpoch::Today, dataset, &mut ThreadRandom))
    }

    /// Scene without any data, used as the fail-open fallback when
    /// initialization fails. The reveal must not block on an empty globe.
    pub fn offline() -> GlobeScene {
        GlobeScene {
            palette: CountryColorsResponse::default(),
            field: SatelliteField::default(),
            dataset: None,
            epoch: DatasetEpoch::Today,
            count_label: String::from("no satellite data"),
            switch_guard: CancellationToken::new(),
        }
    }

    pub fn from_parts<R: RandomSource>(
        palette: CountryColorsResponse,
        epoch: DatasetEpoch,
        dataset: SatelliteDataset,
        rng: &mut R,
    ) -> GlobeScene {
        let mut scene = Self::offline();
        scene.palette = palette;
        let guard = scene.begin_switch();
        scene.apply_dataset(&guard, epoch, dataset, rng);
        scene
    }

    /// Starts an epoch switch: cancels any switch still in flight and returns
    /// the guard token for the new one.
    pub fn begin_switch(&mut self) -> CancellationToken {
        let fresh = CancellationToken::new();
        let stale = std::mem::replace(&mut self.switch_guard, fresh.clone());
        stale.cancel();
        fresh
    }

    /// Replaces the displayed dataset and rebuilds the satellite field from
    /// scratch. Returns false and leaves the scene untouched when the guard
    /// was superseded by a later switch.
    pub fn apply_dataset<R: RandomSource>(
        &mut self,
        guard: &CancellationToken,
        epoch: DatasetEpoch,
        dataset: SatelliteDataset,
        rng: &mut R,
    ) -> bool {
        if guard.is_cancelled() {
            event!("discarding superseded {epoch} dataset");
            return false;
        }
        self.field = SatelliteField::populate(&dataset, &self.palette, rng);
        self.count_label = format!("{} satellites", dataset.total());
        self.dataset = Some(dataset);
        self.epoch = epoch;
        true
    }

    /// Fetches and applies another epoch. Returns `Ok(false)` when the switch
    /// was superseded before its dataset could be applied.
    pub async fn switch_epoch(
        scene_lock: &Arc<RwLock<GlobeScene>>,
        client: &HTTPClient,
        epoch: DatasetEpoch,
    ) -> Result<bool, ResponseError> {
        let guard = scene_lock.write().await.begin_switch();
        let request = SatelliteDatasetRequest::new(epoch);
        let fetch = request.send_request(client);
        let dataset = tokio::select! {
            () = guard.cancelled() => return Ok(false),
            res = fetch => res?,
        };
        Ok(scene_lock.write().await.apply_dataset(&guard, epoch, dataset, &mut ThreadRandom))
    }

    pub fn epoch(&self) -> DatasetEpoch { self.epoch }
    pub fn field(&self) -> &SatelliteField { &self.field }
    pub fn field_mut(&mut self) -> &mut SatelliteField { &mut self.field }
    pub fn dataset(&self) -> Option<&SatelliteDataset> { self.dataset.as_ref() }
    pub fn count_label(&self) -> &str { &self.count_label }
}

// =============================================================================
// FitHub Web - Tariffs Section
// =============================================================================
// Table of Contents:
// 1. Tariffs (hero image, plan list, terms, buy button)
// 2. Tariffs Price (fetch + card list)
// =============================================================================

use fithub_common::{PriceTransition, PurchaseError, PurchaseGate, Tariff, TariffCatalog, TariffSelection};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiClient};
use crate::components::{ErrorDisplay, LoadingSpinner, TariffCard, TermsCheckbox};
use crate::state::{use_offer_countdown, AppState, Lifetime, LoadState};
use crate::utils;

/// Shown instead of the list when the fetch fails for any reason.
pub const TARIFFS_LOAD_ERROR: &str = "Не удалось загрузить тарифы. Попробуйте позже.";

pub const HERO_IMAGE: &str = "/assets/man.svg";
pub const HINT_IMAGE: &str = "/assets/alert1.svg";

// -----------------------------------------------------------------------------
// 1. Tariffs
// -----------------------------------------------------------------------------

/// Plan picker with the purchase gate in front of the buy button.
#[component]
pub fn Tariffs() -> impl IntoView {
    let selection = RwSignal::new(TariffSelection::default());
    let gate = RwSignal::new(PurchaseGate::default());

    let terms_accepted = Signal::derive(move || gate.with(PurchaseGate::terms_accepted));
    let show_terms_error = Signal::derive(move || gate.with(PurchaseGate::validation_error));
    let on_terms_toggle = Callback::new(move |accepted: bool| {
        gate.update(|g| g.set_terms_accepted(accepted));
    });

    let on_buy = move |_| {
        let selected = selection.with_untracked(|s| s.selected().map(str::to_string));
        match gate.try_update(|g| g.attempt(selected.as_deref())) {
            Some(Ok(intent)) => log::info!("Purchase intent recorded: {:?}", intent),
            Some(Err(PurchaseError::NoTariffSelected)) => {
                utils::alert(PurchaseError::NoTariffSelected.user_message());
            }
            Some(Err(PurchaseError::TermsNotAccepted)) => {
                log::debug!("Buy blocked: terms not accepted");
            }
            None => {}
        }
    };

    view! {
        <div class="tariffs">
            <div class="tariffs-hero">
                <img src=HERO_IMAGE alt="man" />
                <div class="shade"></div>
            </div>

            <div class="tariffs-content">
                <TariffsPrice selection=selection />

                <div class="tariff-hint">
                    <img src=HINT_IMAGE alt="alert" />
                    <h5>
                        "Следуя плану на 3 месяца и более, люди получают в 2 раза лучший результат, чем за 1 месяц"
                    </h5>
                </div>

                <TermsCheckbox
                    checked=terms_accepted
                    invalid=show_terms_error
                    error_text=PurchaseError::TermsNotAccepted.user_message()
                    on_toggle=on_terms_toggle
                />

                <button class="tariff-button" on:click=on_buy>
                    "Купить"
                </button>

                <p class="tariff-text">
                    "Нажимая кнопку «Купить», Пользователь соглашается на разовое списание денежных средств "
                    "для получения пожизненного доступа к приложению. Пользователь соглашается, что данные "
                    "кредитной/дебетовой карты будут сохранены для осуществления покупок дополнительных "
                    "услуг сервиса в случае желания пользователя."
                </p>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 2. Tariffs Price
// -----------------------------------------------------------------------------

/// Fetches the catalog once, then renders the featured card and the rest.
#[component]
pub fn TariffsPrice(selection: RwSignal<TariffSelection>) -> impl IntoView {
    let config = expect_context::<AppState>().config;
    let offer = use_offer_countdown();

    let load = RwSignal::new(LoadState::<TariffCatalog>::Loading);
    let phase = RwSignal::new(PriceTransition::default());
    let lifetime = Lifetime::new();

    // One-shot fetch; results are dropped if the section unmounted meanwhile.
    {
        let lifetime = lifetime.clone();
        let client = ApiClient::new(config.api_url.clone());
        spawn_local(async move {
            let result = api::get_tariffs(&client).await;
            if !lifetime.is_alive() {
                log::debug!("Tariffs section gone before fetch completed, dropping response");
                return;
            }
            match result {
                Ok(raw) => {
                    let catalog = TariffCatalog::from_raw(raw);
                    selection.set(TariffSelection::initial(&catalog));
                    load.set(LoadState::Ready(catalog));
                }
                Err(e) => {
                    log::error!("Failed to load tariffs: {}", e);
                    load.set(LoadState::Failed(TARIFFS_LOAD_ERROR.to_string()));
                }
            }
        });
    }

    // Slide/fade window once the offer expires.
    let transition_ms = config.price_transition_ms;
    Effect::new(move |_| {
        if !offer.is_expired() {
            return;
        }
        if phase.try_update(PriceTransition::expire).unwrap_or(false) {
            let lifetime = lifetime.clone();
            spawn_local(async move {
                TimeoutFuture::new(transition_ms).await;
                if lifetime.is_alive() {
                    phase.update(PriceTransition::settle);
                }
            });
        }
    });

    let price_view = Signal::derive(move || phase.with(PriceTransition::view));

    let on_select = Callback::new(move |id: String| {
        load.with_untracked(|state| {
            if let LoadState::Ready(catalog) = state {
                selection.update(|s| {
                    if let Err(e) = s.select(catalog, &id) {
                        log::warn!("Ignoring selection: {}", e);
                    }
                });
            }
        });
    });

    let currency = config.currency.clone();
    let card = move |tariff: Tariff, featured: bool| {
        let id = tariff.id.clone();
        let selected = Signal::derive(move || selection.with(|s| s.is_selected(&id)));
        view! {
            <TariffCard
                tariff=tariff
                featured=featured
                selected=selected
                price_view=price_view
                currency=currency.clone()
                on_select=on_select
            />
        }
    };

    view! {
        <div class="tariff-list">
            {move || match load.get() {
                LoadState::Loading => view! {
                    <LoadingSpinner message="Загрузка тарифов..." />
                }.into_any(),
                LoadState::Failed(message) => view! {
                    <ErrorDisplay message=message />
                }.into_any(),
                LoadState::Ready(catalog) => {
                    let featured = catalog.featured().cloned().map(|t| card(t, true));
                    let others = catalog
                        .others()
                        .iter()
                        .cloned()
                        .map(|t| card(t, false))
                        .collect_view();
                    view! {
                        {featured}
                        <div class="tariff-grid">{others}</div>
                    }.into_any()
                }
            }}

            <input
                type="hidden"
                id="selected-tariff-value"
                prop:value=move || selection.with(|s| s.as_field_value().to_string())
            />
        </div>
    }
}

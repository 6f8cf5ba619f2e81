// =============================================================================
// FitHub Web - Tariff Card
// =============================================================================
// One selectable plan: period, price block, discount badge and blurb.
// =============================================================================

use fithub_common::{discount_percent, format_price, PriceEmphasis, PriceLayout, PriceView, Tariff};
use leptos::prelude::*;

/// Selectable tariff card. `featured` renders the wide "hit" layout.
#[component]
pub fn TariffCard(
    tariff: Tariff,
    #[prop(optional)] featured: bool,
    selected: Signal<bool>,
    price_view: Signal<PriceView>,
    #[prop(into)] currency: String,
    on_select: Callback<String>,
) -> impl IntoView {
    let discount = discount_percent(tariff.price, tariff.full_price);
    let price = format_price(tariff.price, &currency);
    let full_price = format_price(tariff.full_price, &currency);
    let id = tariff.id.clone();

    let layout_class = if featured { "tariff-card tariff-card-featured" } else { "tariff-card" };
    let card_class = move || {
        let border = if selected.get() { "tariff-card-selected" } else { "tariff-card-idle" };
        format!("{} {}", layout_class, border)
    };
    let emphasis = move || PriceEmphasis::for_selected(selected.get()).class();

    view! {
        <div class=card_class on:click=move |_| on_select.run(id.clone())>
            <div class="tariff-body">
                <h3 class="tariff-period">{tariff.period.clone()}</h3>

                <div class="price-transition-container">
                    {move || {
                        let current = price_view.get();
                        match current.layout {
                            PriceLayout::Discounted => view! {
                                <div class="price-stack">
                                    <span class=move || format!("tariff-price {}", emphasis())>
                                        {price.clone()}
                                    </span>
                                    <span class="tariff-full-price">{full_price.clone()}</span>
                                </div>
                            }.into_any(),
                            PriceLayout::FullPrice => view! {
                                <span class=move || format!("tariff-price {} {}", emphasis(), current.animation.class())>
                                    {full_price.clone()}
                                </span>
                            }.into_any(),
                        }
                    }}
                </div>
            </div>

            {move || {
                let badge = price_view.get().badge;
                badge.is_shown().then(|| view! {
                    <div class=format!("discount-badge {}", badge.class())>
                        {format!("-{}%", discount)}
                    </div>
                })
            }}

            {featured.then(|| view! { <div class="tariff-hit">"хит!"</div> })}

            <div class="tariff-text">{tariff.text.clone()}</div>
        </div>
    }
}

use leptos::prelude::*;
use salon_core::contact::Service;

use crate::components::{
    ContactFormView, ErrorView, FaqEntry, FaqList, LazyImage, Navbar, ScrollToTop, StatCounter,
};
use crate::config::SalonConfigResource;
use crate::server::get_salon_config;
use crate::views::appointment::AppointmentBooking;

const GALLERY: [(&str, &str); 6] = [
    ("/images/gallery-1.webp", "Kalıcı oje tasarımı"),
    ("/images/gallery-2.webp", "French manikür"),
    ("/images/gallery-3.webp", "Protez tırnak"),
    ("/images/gallery-4.webp", "Nail art detayı"),
    ("/images/gallery-5.webp", "Pedikür"),
    ("/images/gallery-6.webp", "Özel gün tasarımı"),
];

const STATS: [(&str, &str); 3] = [
    ("500+", "Mutlu Müşteri"),
    ("5+", "Yıllık Deneyim"),
    ("4.9", "Ortalama Puan"),
];

fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "Eve hizmet veriyor musunuz?",
            answer: "Evet, tüm İzmir bölgesine VIP ev hizmeti sunuyoruz.",
        },
        FaqEntry {
            question: "Kalıcı oje ne kadar dayanır?",
            answer: "Doğru bakımla ortalama üç hafta boyunca ilk günkü parlaklığını korur.",
        },
        FaqEntry {
            question: "Randevumu nasıl değiştirebilirim?",
            answer: "WhatsApp üzerinden bize yazmanız yeterli; size en uygun yeni saati birlikte belirleriz.",
        },
        FaqEntry {
            question: "Hangi ödeme yöntemlerini kabul ediyorsunuz?",
            answer: "Nakit, banka kartı ve havale ile ödeme yapabilirsiniz.",
        },
    ]
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config: SalonConfigResource = Resource::new(|| (), |_| get_salon_config());
    provide_context(config);

    let whatsapp_href = move || {
        let number = config
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .whatsapp_number;
        format!("https://wa.me/{}", number)
    };

    view! {
        <Navbar/>

        <main id="main">
            <section id="hero" class="hero">
                <h1 class="hero-title">"Fleura Nails"</h1>
                <p class="hero-subtitle">"Elleriniz için sanat eseri"</p>
                <a href="#randevu-al" class="btn btn-primary">"Randevu Al"</a>
            </section>

            <section id="hizmetler" class="services">
                <h2>"Hizmetlerimiz"</h2>
                <div class="service-grid">
                    {Service::ALL
                        .iter()
                        .filter(|s| **s != Service::Diger)
                        .map(|s| {
                            view! {
                                <article class="service-card">
                                    <LazyImage
                                        src=format!("/images/{}.webp", s.slug())
                                        alt=s.display_name()
                                        class="service-image"
                                    />
                                    <h3>{s.display_name()}</h3>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="istatistik" class="stats">
                {STATS
                    .iter()
                    .map(|&(value, label)| view! { <StatCounter value=value label=label/> })
                    .collect::<Vec<_>>()}
            </section>

            <section id="galeri" class="gallery">
                <h2>"Galeri"</h2>
                <div class="gallery-grid">
                    {GALLERY
                        .iter()
                        .map(|&(src, alt)| {
                            view! {
                                <div class="gallery-item">
                                    <LazyImage src=src alt=alt class="gallery-image"/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="randevu-al" class="booking">
                <h2>"Online Randevu"</h2>
                <Suspense fallback=|| ()>
                    {move || {
                        config
                            .get()
                            .and_then(|result| result.err())
                            .map(|_| {
                                view! {
                                    <ErrorView message=Some(
                                        "Randevu ayarları yüklenemedi, varsayılan iletişim bilgileri kullanılıyor."
                                            .to_string(),
                                    )/>
                                }
                            })
                    }}
                </Suspense>
                <AppointmentBooking/>
            </section>

            <section id="sss" class="faq">
                <h2>"Sıkça Sorulan Sorular"</h2>
                <FaqList entries=faq_entries()/>
            </section>

            <section id="iletisim" class="contact">
                <h2>"İletişim"</h2>
                <ContactFormView/>
            </section>
        </main>

        <Suspense fallback=|| ()>
            <a
                class="whatsapp-float"
                href=whatsapp_href
                target="_blank"
                rel="noopener"
                aria-label="WhatsApp"
            >
                "WhatsApp"
            </a>
        </Suspense>
        <ScrollToTop/>
    }
}

//! Seed parties shown before an admin has saved anything.

use super::{ImageSource, Party, PartyStatus};

/// The party list used when the parties slot is empty or unreadable.
pub fn initial_parties() -> Vec<Party> {
    vec![
        Party {
            id: "1".to_string(),
            title: "서울 신라호텔 프라이빗 와인 파티".to_string(),
            date: "2024-06-15 19:00".to_string(),
            location: "서울 중구 신라호텔 영빈관".to_string(),
            capacity: 20,
            current_applicants: 12,
            price: 150_000,
            description:
                "엄선된 최고급 와인과 함께하는 신라호텔의 품격 있는 저녁 만남입니다. 신라호텔 전문 소믈리에가 직접 큐레이션한 5종의 프리미엄 와인과 페어링 코스 요리가 제공됩니다."
                    .to_string(),
            image_url: ImageSource::from(
                "https://images.unsplash.com/photo-1510812431401-41d2bd2722f3?q=80&w=2070&auto=format&fit=crop",
            ),
            intro_images: vec![
                ImageSource::from(
                    "https://images.unsplash.com/photo-1553344518-a4673899912c?q=80&w=2070&auto=format&fit=crop",
                ),
                ImageSource::from(
                    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?q=80&w=2070&auto=format&fit=crop",
                ),
            ],
            status: PartyStatus::Recruiting,
            google_form_url: "https://forms.google.com".to_string(),
        },
        Party {
            id: "2".to_string(),
            title: "청담동 테라스 멤버십 미팅".to_string(),
            date: "2024-06-22 18:00".to_string(),
            location: "서울 강남구 청담동 루프탑 카페".to_string(),
            capacity: 12,
            current_applicants: 8,
            price: 80_000,
            description:
                "노을 지는 강남의 야경을 배경으로 편안하게 대화할 수 있는 프라이빗 미팅입니다. 소수 정예로 운영되어 깊이 있는 대화가 가능합니다."
                    .to_string(),
            image_url: ImageSource::from(
                "https://images.unsplash.com/photo-1533174072545-7a4b6ad7a6c3?q=80&w=2070&auto=format&fit=crop",
            ),
            intro_images: vec![ImageSource::from(
                "https://images.unsplash.com/photo-1504674900247-0877df9cc836?q=80&w=2070&auto=format&fit=crop",
            )],
            status: PartyStatus::Recruiting,
            google_form_url: "https://forms.google.com".to_string(),
        },
        Party {
            id: "3".to_string(),
            title: "한남동 프라이빗 다이닝 소셜".to_string(),
            date: "2024-06-29 19:30".to_string(),
            location: "서울 용산구 한남동 미슐랭 가이드 레스토랑".to_string(),
            capacity: 8,
            current_applicants: 4,
            price: 180_000,
            description:
                "한남동의 조용한 골목, 미슐랭 스타 셰프의 창의적인 요리와 함께하는 극소수 정예 다이닝 파티입니다. 미식과 예술을 사랑하는 분들을 위해 준비했습니다."
                    .to_string(),
            image_url: ImageSource::from(
                "https://images.unsplash.com/photo-1559339352-11d035aa65de?q=80&w=1974&auto=format&fit=crop",
            ),
            intro_images: vec![ImageSource::from(
                "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?q=80&w=2070&auto=format&fit=crop",
            )],
            status: PartyStatus::Recruiting,
            google_form_url: "https://forms.google.com".to_string(),
        },
        Party {
            id: "4".to_string(),
            title: "시그니엘 서울 스카이라인 라운지".to_string(),
            date: "2024-07-06 20:00".to_string(),
            location: "서울 송파구 잠실 시그니엘 서울 79층".to_string(),
            capacity: 16,
            current_applicants: 10,
            price: 120_000,
            description:
                "대한민국에서 가장 높은 곳에서 즐기는 샴페인 나이트입니다. 환상적인 한강 뷰와 시티 라이트를 감상하며 새로운 인연과 우아한 시간을 만끽하세요."
                    .to_string(),
            image_url: ImageSource::from(
                "https://images.unsplash.com/photo-1470337458703-46ad1756a187?q=80&w=2069&auto=format&fit=crop",
            ),
            intro_images: vec![ImageSource::from(
                "https://images.unsplash.com/photo-1514361892635-6b07e31e75f9?q=80&w=2070&auto=format&fit=crop",
            )],
            status: PartyStatus::Recruiting,
            google_form_url: "https://forms.google.com".to_string(),
        },
    ]
}

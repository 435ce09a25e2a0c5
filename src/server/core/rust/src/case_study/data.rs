use super::types::{CaseStudy, Content, Images, Localized as L};

pub(super) static CASE_STUDIES: &[CaseStudy] = &[
  CaseStudy {
    slug: "celtic",
    title: L::new("Celtic Self Storage", "Celtic Self Storage"),
    description: L::new(
      "Strona internetowa i kampania Google Ads dla firmy oferującej magazyny self-storage",
      "Website and Google Ads campaign for a self-storage company",
    ),
    tags: &["Website", "Google Ads", "SEO"],
    client: "Celtic Self Storage",
    url: "https://celticstorage.pl",
    featured: true,
    order: 1,
    images: Images {
      cover: "/images/cases/celtic/cover.jpg",
      gallery: &[
        "/images/cases/celtic/gallery-1.jpg",
        "/images/cases/celtic/gallery-2.jpg",
        "/images/cases/celtic/gallery-3.jpg",
      ],
    },
    results: None,
    content: Content {
      about: L::new(
        "Celtic Self Storage to nowoczesna firma oferująca wynajem magazynów samoobsługowych w Warszawie. Klienci mogą wynająć boksy o różnych rozmiarach do przechowywania mebli, dokumentów firmowych czy sezonowego sprzętu.",
        "Celtic Self Storage is a modern company offering self-storage unit rentals in Warsaw. Customers can rent boxes of various sizes to store furniture, business documents or seasonal equipment.",
      ),
      challenge: L::new(
        "Firma potrzebowała profesjonalnej strony internetowej, która jasno komunikuje ofertę i ułatwia klientom wybór odpowiedniego rozmiaru magazynu. Dodatkowo chcieli przyciągnąć nowych klientów przez reklamy Google.",
        "The company needed a professional website that clearly communicates the offer and helps customers choose the right storage size. Additionally, they wanted to attract new customers through Google advertising.",
      ),
      solution: L::new(
        "Zaprojektowaliśmy przejrzystą stronę z kalkulatorem cen i systemem rezerwacji online. Uruchomiliśmy kampanię Google Ads targetującą osoby szukające magazynów w Warszawie, co przyniosło stały napływ zapytań.",
        "We designed a clear website with a price calculator and online booking system. We launched a Google Ads campaign targeting people looking for storage in Warsaw, which brought a steady flow of inquiries.",
      ),
      tasks: &[
        L::new(
          "Projekt i budowa responsywnej strony internetowej",
          "Design and development of responsive website",
        ),
        L::new(
          "Kalkulator cen z interaktywnym wyborem rozmiaru",
          "Price calculator with interactive size selection",
        ),
        L::new("Integracja z systemem rezerwacji", "Integration with booking system"),
        L::new("Kampania Google Ads z remarketingiem", "Google Ads campaign with remarketing"),
        L::new("Optymalizacja SEO lokalna", "Local SEO optimization"),
      ],
    },
  },
  CaseStudy {
    slug: "deluxdeco",
    title: L::new("DeluxDeco", "DeluxDeco"),
    description: L::new(
      "Strona e-commerce dla sklepu z luksusowymi dekoracjami wnętrz",
      "E-commerce website for a luxury home decor store",
    ),
    tags: &["Website", "E-commerce", "SEO"],
    client: "DeluxDeco",
    url: "https://deluxdeco.pl",
    featured: true,
    order: 2,
    images: Images {
      cover: "/images/cases/deluxdeco/cover.jpg",
      gallery: &[
        "/images/cases/deluxdeco/gallery-1.jpg",
        "/images/cases/deluxdeco/gallery-2.jpg",
        "/images/cases/deluxdeco/gallery-3.jpg",
      ],
    },
    results: None,
    content: Content {
      about: L::new(
        "DeluxDeco to butikowy sklep internetowy oferujący ekskluzywne dekoracje wnętrz, od designerskich świeczników po luksusowe tekstylia. Marka kieruje swoją ofertę do klientów ceniących jakość i wyjątkowy design.",
        "DeluxDeco is a boutique online store offering exclusive home decorations, from designer candleholders to luxury textiles. The brand targets customers who value quality and unique design.",
      ),
      challenge: L::new(
        "Poprzednia strona sklepu była przestarzała i nie oddawała premium charakteru marki. Klienci mieli problemy z nawigacją, a proces zakupowy był zbyt skomplikowany. Ruch organiczny był minimalny.",
        "The previous store website was outdated and did not reflect the premium nature of the brand. Customers had navigation problems, and the purchasing process was too complicated. Organic traffic was minimal.",
      ),
      solution: L::new(
        "Stworzyliśmy elegancką platformę e-commerce z intuicyjną nawigacją i szybkim procesem zakupowym. Wdrożyliśmy strategię SEO skupioną na frazach związanych z luksusowymi dekoracjami, co znacząco zwiększyło ruch.",
        "We created an elegant e-commerce platform with intuitive navigation and a fast checkout process. We implemented an SEO strategy focused on phrases related to luxury decorations, which significantly increased traffic.",
      ),
      tasks: &[
        L::new("Projekt UX/UI platformy e-commerce", "UX/UI design of e-commerce platform"),
        L::new("Budowa sklepu na nowoczesnym stacku", "Building store on modern tech stack"),
        L::new(
          "Integracja z systemem płatności i dostawy",
          "Integration with payment and delivery systems",
        ),
        L::new("Optymalizacja szybkości ładowania", "Page speed optimization"),
        L::new("Strategia i wdrożenie SEO", "SEO strategy and implementation"),
      ],
    },
  },
  CaseStudy {
    slug: "palac-zolwin",
    title: L::new("Pałac Żółwin", "Zolwin Palace"),
    description: L::new(
      "Strona internetowa dla zabytkowego pałacu oferującego przestrzenie eventowe",
      "Website for a historic palace offering event spaces",
    ),
    tags: &["Website", "SEO"],
    client: "Pałac Żółwin",
    url: "https://palaczolwin.pl",
    featured: false,
    order: 3,
    images: Images {
      cover: "/images/cases/palac-zolwin/cover.jpg",
      gallery: &[
        "/images/cases/palac-zolwin/gallery-1.jpg",
        "/images/cases/palac-zolwin/gallery-2.jpg",
        "/images/cases/palac-zolwin/gallery-3.jpg",
      ],
    },
    results: None,
    content: Content {
      about: L::new(
        "Pałac Żółwin to zabytkowa rezydencja z XIX wieku, która oferuje wynajem przestrzeni na wesela, konferencje i eventy firmowe. Położony w malowniczej okolicy pod Warszawą, przyciąga pary szukające wyjątkowego miejsca na ślub.",
        "Zolwin Palace is a historic 19th-century residence that offers space rental for weddings, conferences and corporate events. Located in a picturesque area near Warsaw, it attracts couples looking for a unique wedding venue.",
      ),
      challenge: L::new(
        "Pałac miał przestarzałą stronę internetową, która nie pokazywała pełnego piękna obiektu. Zdjęcia były niskiej jakości, a formularz kontaktowy często nie działał. Potencjalni klienci wybierali konkurencję.",
        "The palace had an outdated website that did not show the full beauty of the venue. Photos were low quality, and the contact form often did not work. Potential customers were choosing competitors.",
      ),
      solution: L::new(
        "Zaprojektowaliśmy elegancką stronę z wielkoformatowymi zdjęciami i wirtualnym spacerem po pałacu. Dodaliśmy kalendarz dostępności i prosty formularz zapytań, co znacznie ułatwiło proces rezerwacji.",
        "We designed an elegant website with large-format photos and a virtual tour of the palace. We added an availability calendar and simple inquiry form, which greatly simplified the booking process.",
      ),
      tasks: &[
        L::new("Sesja zdjęciowa profesjonalna obiektu", "Professional photo session of the venue"),
        L::new(
          "Projekt i budowa strony prezentacyjnej",
          "Design and development of presentation website",
        ),
        L::new("Wirtualny spacer 360°", "360° virtual tour"),
        L::new("Kalendarz dostępności i system zapytań", "Availability calendar and inquiry system"),
        L::new("Pozycjonowanie na frazy ślubne", "SEO for wedding-related keywords"),
      ],
    },
  },
  CaseStudy {
    slug: "common-thread",
    title: L::new("Common Thread", "Common Thread"),
    description: L::new(
      "Strona internetowa dla producenta ekskluzywnych dywanów na zamówienie",
      "Website for a manufacturer of exclusive custom carpets",
    ),
    tags: &["Website", "SEO"],
    client: "Common Thread",
    url: "https://commonthread.pl",
    featured: false,
    order: 4,
    images: Images {
      cover: "/images/cases/common-thread/cover.jpg",
      gallery: &[
        "/images/cases/common-thread/gallery-1.jpg",
        "/images/cases/common-thread/gallery-2.jpg",
        "/images/cases/common-thread/gallery-3.jpg",
      ],
    },
    results: None,
    content: Content {
      about: L::new(
        "Common Thread to polska manufaktura specjalizująca się w produkcji luksusowych dywanów na zamówienie. Każdy dywan jest ręcznie wykonany z najwyższej jakości materiałów, a klienci mogą zaprojektować własny wzór.",
        "Common Thread is a Polish manufacture specializing in the production of luxury custom carpets. Each carpet is handmade from the highest quality materials, and customers can design their own pattern.",
      ),
      challenge: L::new(
        "Firma potrzebowała strony, która pokaże rzemieślniczy charakter produkcji i pozwoli klientom zobaczyć proces tworzenia dywanu. Poprzednia strona była zbyt prosta i nie budowała zaufania potrzebnego przy produktach premium.",
        "The company needed a website that would show the artisanal nature of production and allow customers to see the carpet creation process. The previous site was too simple and did not build the trust needed for premium products.",
      ),
      solution: L::new(
        "Stworzyliśmy wizualnie bogatą stronę z galerią realizacji, sekcją „jak powstaje dywan\" i konfiguratorem pozwalającym klientom eksperymentować z wzorami. Wdrożyliśmy SEO targetujące architektów wnętrz.",
        "We created a visually rich website with a project gallery, \"how a carpet is made\" section and a configurator allowing customers to experiment with patterns. We implemented SEO targeting interior designers.",
      ),
      tasks: &[
        L::new("Strona z galerią portfolio", "Website with portfolio gallery"),
        L::new(
          "Sekcja prezentująca proces produkcji",
          "Section presenting the production process",
        ),
        L::new("Prosty konfigurator wzorów", "Simple pattern configurator"),
        L::new("Formularz zapytań B2B", "B2B inquiry form"),
        L::new("SEO dla branży wnętrzarskiej", "SEO for interior design industry"),
      ],
    },
  },
];

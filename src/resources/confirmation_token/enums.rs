//! Enumerations used by confirmation tokens

use crate::enums::string_enum;

string_enum! {
    /// How an offline card-present transaction was authorized
    pub enum CardPresentOfflineType {
        Deferred => "deferred",
    }
}

string_enum! {
    /// How card details were read in a card-present transaction
    pub enum CardReadMethod {
        ContactEmv => "contact_emv",
        ContactlessEmv => "contactless_emv",
        ContactlessMagstripeMode => "contactless_magstripe_mode",
        MagneticStripeFallback => "magnetic_stripe_fallback",
        MagneticStripeTrack2 => "magnetic_stripe_track2",
    }
}

string_enum! {
    /// Account type printed on a card-present receipt
    pub enum ReceiptAccountType {
        Checking => "checking",
        Credit => "credit",
        Prepaid => "prepaid",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Wallet used for a card-present transaction
    pub enum CardPresentWalletType {
        ApplePay => "apple_pay",
        GooglePay => "google_pay",
        SamsungPay => "samsung_pay",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Wallet a card was tokenized with
    pub enum CardWalletType {
        AmexExpressCheckout => "amex_express_checkout",
        ApplePay => "apple_pay",
        GooglePay => "google_pay",
        Link => "link",
        Masterpass => "masterpass",
        SamsungPay => "samsung_pay",
        VisaCheckout => "visa_checkout",
    }
}

string_enum! {
    /// Customer's bank for EPS
    pub enum EpsBank {
        ArzteUndApothekerBank => "arzte_und_apotheker_bank",
        AustrianAnadiBankAg => "austrian_anadi_bank_ag",
        BankAustria => "bank_austria",
        BankhausCarlSpangler => "bankhaus_carl_spangler",
        BankhausSchelhammerUndSchatteraAg => "bankhaus_schelhammer_und_schattera_ag",
        BawagPskAg => "bawag_psk_ag",
        BksBankAg => "bks_bank_ag",
        BrullKallmusBankAg => "brull_kallmus_bank_ag",
        BtvVierLanderBank => "btv_vier_lander_bank",
        CapitalBankGraweGruppeAg => "capital_bank_grawe_gruppe_ag",
        DeutscheBankAg => "deutsche_bank_ag",
        Dolomitenbank => "dolomitenbank",
        EasybankAg => "easybank_ag",
        ErsteBankUndSparkassen => "erste_bank_und_sparkassen",
        HypoAlpeadriabankInternationalAg => "hypo_alpeadriabank_international_ag",
        HypoBankBurgenlandAktiengesellschaft => "hypo_bank_burgenland_aktiengesellschaft",
        HypoNoeLbFurNiederosterreichUWien => "hypo_noe_lb_fur_niederosterreich_u_wien",
        HypoOberosterreichSalzburgSteiermark => "hypo_oberosterreich_salzburg_steiermark",
        HypoTirolBankAg => "hypo_tirol_bank_ag",
        HypoVorarlbergBankAg => "hypo_vorarlberg_bank_ag",
        MarchfelderBank => "marchfelder_bank",
        OberbankAg => "oberbank_ag",
        RaiffeisenBankengruppeOsterreich => "raiffeisen_bankengruppe_osterreich",
        SchoellerbankAg => "schoellerbank_ag",
        SpardaBankWien => "sparda_bank_wien",
        VolksbankGruppe => "volksbank_gruppe",
        VolkskreditbankAg => "volkskreditbank_ag",
        VrBankBraunau => "vr_bank_braunau",
    }
}

string_enum! {
    /// FPX account holder type
    pub enum FpxAccountHolderType {
        Company => "company",
        Individual => "individual",
    }
}

string_enum! {
    /// Customer's bank for FPX
    pub enum FpxBank {
        AffinBank => "affin_bank",
        Agrobank => "agrobank",
        AllianceBank => "alliance_bank",
        Ambank => "ambank",
        BankIslam => "bank_islam",
        BankMuamalat => "bank_muamalat",
        BankOfChina => "bank_of_china",
        BankRakyat => "bank_rakyat",
        Bsn => "bsn",
        Cimb => "cimb",
        DeutscheBank => "deutsche_bank",
        HongLeongBank => "hong_leong_bank",
        Hsbc => "hsbc",
        Kfh => "kfh",
        Maybank2e => "maybank2e",
        Maybank2u => "maybank2u",
        Ocbc => "ocbc",
        PbEnterprise => "pb_enterprise",
        PublicBank => "public_bank",
        Rhb => "rhb",
        StandardChartered => "standard_chartered",
        Uob => "uob",
    }
}

string_enum! {
    /// Customer's bank for iDEAL
    pub enum IdealBank {
        AbnAmro => "abn_amro",
        AsnBank => "asn_bank",
        Bunq => "bunq",
        Handelsbanken => "handelsbanken",
        Ing => "ing",
        Knab => "knab",
        Moneyou => "moneyou",
        N26 => "n26",
        Nn => "nn",
        Rabobank => "rabobank",
        Regiobank => "regiobank",
        Revolut => "revolut",
        SnsBank => "sns_bank",
        TriodosBank => "triodos_bank",
        VanLanschot => "van_lanschot",
        Yoursafe => "yoursafe",
    }
}

string_enum! {
    /// Bank identifier code of the customer's iDEAL bank
    pub enum IdealBic {
        Abnanl2a => "ABNANL2A",
        Asnbnl21 => "ASNBNL21",
        Bitsnl2a => "BITSNL2A",
        Bunqnl2a => "BUNQNL2A",
        Fvlbnl22 => "FVLBNL22",
        Handnl2a => "HANDNL2A",
        Ingbnl2a => "INGBNL2A",
        Knabnl2h => "KNABNL2H",
        Moyonl21 => "MOYONL21",
        Nnbanl2g => "NNBANL2G",
        Ntsbdeb1 => "NTSBDEB1",
        Rabonl2u => "RABONL2U",
        Rbrbnl21 => "RBRBNL21",
        Revoie23 => "REVOIE23",
        Revolt21 => "REVOLT21",
        Snsbnl2a => "SNSBNL2A",
        Trionl2u => "TRIONL2U",
    }
}

string_enum! {
    /// Brand of a Korean card
    pub enum KrCardBrand {
        Bc => "bc",
        Citi => "citi",
        Hana => "hana",
        Hyundai => "hyundai",
        Jeju => "jeju",
        Jeonbuk => "jeonbuk",
        Kakaobank => "kakaobank",
        Kbank => "kbank",
        Kdbbank => "kdbbank",
        Kookmin => "kookmin",
        Kwangju => "kwangju",
        Lotte => "lotte",
        Mg => "mg",
        Nh => "nh",
        Post => "post",
        Samsung => "samsung",
        Savingsbank => "savingsbank",
        Shinhan => "shinhan",
        Shinhyup => "shinhyup",
        Suhyup => "suhyup",
        Tossbank => "tossbank",
        Woori => "woori",
    }
}

string_enum! {
    /// Funding source of a Naver Pay payment
    pub enum NaverPayFunding {
        Card => "card",
        Points => "points",
    }
}

string_enum! {
    /// Customer's bank for Przelewy24
    pub enum P24Bank {
        AliorBank => "alior_bank",
        BankMillennium => "bank_millennium",
        BankNowyBfgSa => "bank_nowy_bfg_sa",
        BankPekaoSa => "bank_pekao_sa",
        BankiSpbdzielcze => "banki_spbdzielcze",
        Blik => "blik",
        BnpParibas => "bnp_paribas",
        Boz => "boz",
        CitiHandlowy => "citi_handlowy",
        CreditAgricole => "credit_agricole",
        Envelobank => "envelobank",
        EtransferPocztowy24 => "etransfer_pocztowy24",
        GetinBank => "getin_bank",
        Ideabank => "ideabank",
        Ing => "ing",
        Inteligo => "inteligo",
        MbankMtransfer => "mbank_mtransfer",
        NestPrzelew => "nest_przelew",
        NoblePay => "noble_pay",
        PbacZIpko => "pbac_z_ipko",
        PlusBank => "plus_bank",
        SantanderPrzelew24 => "santander_przelew24",
        TmobileUsbugiBankowe => "tmobile_usbugi_bankowe",
        ToyotaBank => "toyota_bank",
        Velobank => "velobank",
        VolkswagenBank => "volkswagen_bank",
    }
}

string_enum! {
    /// Type of a payment method
    pub enum PaymentMethodType {
        AcssDebit => "acss_debit",
        Affirm => "affirm",
        AfterpayClearpay => "afterpay_clearpay",
        Alipay => "alipay",
        Alma => "alma",
        AmazonPay => "amazon_pay",
        AuBecsDebit => "au_becs_debit",
        BacsDebit => "bacs_debit",
        Bancontact => "bancontact",
        Blik => "blik",
        Boleto => "boleto",
        Card => "card",
        CardPresent => "card_present",
        Cashapp => "cashapp",
        CustomerBalance => "customer_balance",
        Eps => "eps",
        Fpx => "fpx",
        Giropay => "giropay",
        Grabpay => "grabpay",
        Ideal => "ideal",
        InteracPresent => "interac_present",
        KakaoPay => "kakao_pay",
        Klarna => "klarna",
        Konbini => "konbini",
        KrCard => "kr_card",
        Link => "link",
        Mobilepay => "mobilepay",
        Multibanco => "multibanco",
        NaverPay => "naver_pay",
        Oxxo => "oxxo",
        P24 => "p24",
        PayByBank => "pay_by_bank",
        Payco => "payco",
        Paynow => "paynow",
        Paypal => "paypal",
        Pix => "pix",
        Promptpay => "promptpay",
        RevolutPay => "revolut_pay",
        SamsungPay => "samsung_pay",
        SepaDebit => "sepa_debit",
        Sofort => "sofort",
        Swish => "swish",
        Twint => "twint",
        UsBankAccount => "us_bank_account",
        WechatPay => "wechat_pay",
        Zip => "zip",
    }
}

string_enum! {
    /// Account holder type of a US bank account
    pub enum UsBankAccountHolderType {
        Company => "company",
        Individual => "individual",
    }
}

string_enum! {
    /// Account type of a US bank account
    pub enum UsBankAccountType {
        Checking => "checking",
        Savings => "savings",
    }
}

string_enum! {
    /// Network a US bank account can be debited through
    pub enum UsBankAccountNetwork {
        Ach => "ach",
        UsDomesticWire => "us_domestic_wire",
    }
}

string_enum! {
    /// ACH return code that blocked a US bank account
    pub enum BlockedNetworkCode {
        R02 => "R02",
        R03 => "R03",
        R04 => "R04",
        R05 => "R05",
        R07 => "R07",
        R08 => "R08",
        R10 => "R10",
        R11 => "R11",
        R16 => "R16",
        R20 => "R20",
        R29 => "R29",
        R31 => "R31",
    }
}

string_enum! {
    /// Reason a US bank account is blocked
    pub enum BlockedReason {
        BankAccountClosed => "bank_account_closed",
        BankAccountFrozen => "bank_account_frozen",
        BankAccountInvalidDetails => "bank_account_invalid_details",
        BankAccountRestricted => "bank_account_restricted",
        BankAccountUnusable => "bank_account_unusable",
        DebitNotAuthorized => "debit_not_authorized",
    }
}

string_enum! {
    /// How a payment method is intended to be reused
    pub enum SetupFutureUsage {
        OffSession => "off_session",
        OnSession => "on_session",
    }
}

//! Enumerations used by tax IDs

use crate::enums::string_enum;

string_enum! {
    /// Type of the owner of a tax ID
    pub enum TaxIdOwnerType {
        Account => "account",
        Application => "application",
        Customer => "customer",
        SelfOwned => "self",
    }
}

string_enum! {
    /// Type of tax ID
    pub enum TaxIdType {
        AdNrt => "ad_nrt",
        AeTrn => "ae_trn",
        AlTin => "al_tin",
        AmTin => "am_tin",
        AoTin => "ao_tin",
        ArCuit => "ar_cuit",
        AuAbn => "au_abn",
        AuArn => "au_arn",
        BaTin => "ba_tin",
        BbTin => "bb_tin",
        BgUic => "bg_uic",
        BhVat => "bh_vat",
        BoTin => "bo_tin",
        BrCnpj => "br_cnpj",
        BrCpf => "br_cpf",
        BsTin => "bs_tin",
        ByTin => "by_tin",
        CaBn => "ca_bn",
        CaGstHst => "ca_gst_hst",
        CaPstBc => "ca_pst_bc",
        CaPstMb => "ca_pst_mb",
        CaPstSk => "ca_pst_sk",
        CaQst => "ca_qst",
        CdNif => "cd_nif",
        ChUid => "ch_uid",
        ChVat => "ch_vat",
        ClTin => "cl_tin",
        CnTin => "cn_tin",
        CoNit => "co_nit",
        CrTin => "cr_tin",
        DeStn => "de_stn",
        DoRcn => "do_rcn",
        EcRuc => "ec_ruc",
        EgTin => "eg_tin",
        EsCif => "es_cif",
        EuOssVat => "eu_oss_vat",
        EuVat => "eu_vat",
        GbVat => "gb_vat",
        GeVat => "ge_vat",
        GnNif => "gn_nif",
        HkBr => "hk_br",
        HrOib => "hr_oib",
        HuTin => "hu_tin",
        IdNpwp => "id_npwp",
        IlVat => "il_vat",
        InGst => "in_gst",
        IsVat => "is_vat",
        JpCn => "jp_cn",
        JpRn => "jp_rn",
        JpTrn => "jp_trn",
        KePin => "ke_pin",
        KhTin => "kh_tin",
        KrBrn => "kr_brn",
        KzBin => "kz_bin",
        LiUid => "li_uid",
        LiVat => "li_vat",
        MaVat => "ma_vat",
        MdVat => "md_vat",
        MePib => "me_pib",
        MkVat => "mk_vat",
        MrNif => "mr_nif",
        MxRfc => "mx_rfc",
        MyFrp => "my_frp",
        MyItn => "my_itn",
        MySst => "my_sst",
        NgTin => "ng_tin",
        NoVat => "no_vat",
        NoVoec => "no_voec",
        NpPan => "np_pan",
        NzGst => "nz_gst",
        OmVat => "om_vat",
        PeRuc => "pe_ruc",
        PhTin => "ph_tin",
        RoTin => "ro_tin",
        RsPib => "rs_pib",
        RuInn => "ru_inn",
        RuKpp => "ru_kpp",
        SaVat => "sa_vat",
        SgGst => "sg_gst",
        SgUen => "sg_uen",
        SiTin => "si_tin",
        SnNinea => "sn_ninea",
        SrFin => "sr_fin",
        SvNit => "sv_nit",
        ThVat => "th_vat",
        TjTin => "tj_tin",
        TrTin => "tr_tin",
        TwVat => "tw_vat",
        TzVat => "tz_vat",
        UaVat => "ua_vat",
        UgTin => "ug_tin",
        Unknown => "unknown",
        UsEin => "us_ein",
        UyRuc => "uy_ruc",
        UzTin => "uz_tin",
        UzVat => "uz_vat",
        VeRif => "ve_rif",
        VnTin => "vn_tin",
        ZaVat => "za_vat",
        ZmTin => "zm_tin",
        ZwTin => "zw_tin",
    }
}

string_enum! {
    /// Verification status of a tax ID
    pub enum TaxIdVerificationStatus {
        Pending => "pending",
        Unavailable => "unavailable",
        Unverified => "unverified",
        Verified => "verified",
    }
}

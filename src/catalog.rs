//! Static vocabularies of the supported CDS datasets.
//!
//! These are the values accepted by the request builders, not the complete
//! CDS catalogue: some combinations listed here have no data upstream.

pub mod cordex {
    pub const DATASET: &str = "projections-cordex-domains-single-levels";

    pub const DOMAINS: &[&str] = &["arctic", "europe", "mediterranean"];

    pub const EXPERIMENTS: &[&str] = &["evaluation", "historical", "rcp_2_6", "rcp_4_5", "rcp_8_5"];

    pub const HORIZONTAL_RESOLUTIONS: &[&str] = &[
        "0_11_degree_x_0_11_degree",
        "0_22_degree_x_0_22_degree",
        "0_44_degree_x_0_44_degree",
    ];

    // 3 and 6 hourly are offered upstream but not supported here.
    pub const TEMPORAL_RESOLUTIONS: &[&str] = &["daily_mean", "monthly_mean", "seasonal_mean"];

    pub const VARIABLES: &[&str] = &[
        "2m_air_temperature",
        "2m_relative_humidity",
        "2m_surface_specific_humidity",
        "10m_u_component_of_the_wind",
        "10m_v_component_of_the_wind",
        "10m_wind_speed",
        "maximum_2m_temperature_in_the_last_24_hours",
        "minimum_2m_temperature_in_the_last_24_hours",
        "200hpa_temperature",
        "200hpa_u_component_of_the_wind",
        "200hpa_v_component_of_the_wind",
        "500hpa_geopotential_height",
        "850hpa_u_component_of_the_wind",
        "850hpa_v_component_of_the_wind",
        "evaporation",
        "land_area_fraction",
        "mean_sea_level_pressure",
        "mean_precipitation_flux",
        "orography",
        "surface_pressure",
        "surface_solar_radiation_downwards",
        "surface_thermal_radiation_downward",
        "surface_upwelling_shortwave_radiation",
        "total_cloud_cover",
        "total_run_off_flux",
    ];

    pub const GCMS: &[&str] = &[
        "cccma_canesm2",
        "cnrm_cerfacs_cm5",
        "csiro_bom_access1_0",
        "csiro_bom_access1_3",
        "csiro_qccce_csiro_mk3_6_0",
        "era_interim",
        "ichec_ec_earth",
        "ipsl_cm5a_lr",
        "ipsl_cm5a_mr",
        "miroc_miroc5",
        "mohc_hadgem2_es",
        "mpi_m_mpi_esm_lr",
        "mpi_m_mpi_esm_mr",
        "ncar_ccsm4",
        "ncc_noresm1_m",
        "noaa_gfdl_gfdl_esm2g",
    ];

    pub const RCMS: &[&str] = &[
        "awi_hirham5",
        "bccr_wrf331",
        "boun_regcm4_3",
        "cccma_canrcm4",
        "clmcom_btu_cclm4_8_17",
        "clmcom_clm_cclm4_8_17",
        "clmcom_cclm4_8_17_clm3_5",
        "clmcom_cclm5_0_2",
        "clmcom_eth_cosmo_crclim",
        "clmcom_hzg_cclm5_0_15",
        "clmcom_kit_cclm5_0_15",
        "cmcc_cclm4_8_19",
        "cnrm_aladin52",
        "cnrm_aladin53",
        "cnrm_aladin63",
        "csiro_ccam_2008",
        "cyi_wrf351",
        "dmi_hirham5",
        "elu_regcm4_3",
        "gerics_remo2009",
        "gerics_remo2015",
        "guf_cclm4_8_18",
        "ictp_regcm4_3",
        "ictp_regcm4_4",
        "ictp_regcm4_6",
        "ictp_regcm4_7",
        "iitm_regcm4_4",
        "inpe_eta",
        "ipsl_wrf381p",
        "isu_regcm4",
        "knmi_racmo21p",
        "knmi_racmo22e",
        "knmi_racmo22t",
        "lmd_lmdz4nemomed8",
        "mgo_rrcm",
        "mohc_hadrem3_ga7_05",
        "mohc_hadrm3p",
        "mpi_csc_remo2009",
        "ncar_regcm4",
        "ncar_wrf",
        "ornl_regcm4_7",
        "ouranos_crcm5",
        "rmib_ugent_alaro_0",
        "ru_core_regcm4_3",
        "smhi_rca4",
        "smhi_rca4_sn",
        "ua_wrf",
        "ucan_wrf341i",
        "uhoh_wrf361h",
        "ulg_mar311",
        "ulg_mar36",
        "unsw_wrf360j",
        "unsw_wrf360k",
        "unsw_wrf360l",
        "uqam_crcm5",
        "uqam_crcm5_sn",
    ];

    pub const ENSEMBLE_MEMBERS: &[&str] =
        &["r1i1p1", "r2i1p1", "r3i1p1", "r6i1p1", "r12i1p1", "r0i0p0"];

    /// Year bounds for single start/end requests.
    pub const EARLIEST_YEAR: i32 = 1950;
    pub const LATEST_YEAR: i32 = 2100;
}

/// ARCTIC-CORDEX subset of the CORDEX single levels dataset.
///
/// Only the 0.22 degree CanESM2/CanRCM4 runs are known to be complete; the
/// 0.44 degree runs have more model pairs but their valid combinations are
/// not catalogued yet.
pub mod arctic {
    pub const DOMAINS: &[&str] = &["arctic"];

    pub const EXPERIMENTS: &[&str] = &["rcp_4_5", "rcp_8_5", "historical"];

    pub const HORIZONTAL_RESOLUTIONS: &[&str] =
        &["0_22_degree_x_0_22_degree", "0_44_degree_x_0_44_degree"];

    pub const TEMPORAL_RESOLUTIONS: &[&str] = &["daily_mean"];

    pub const GCMS: &[&str] = &["cccma_canesm2"];

    pub const RCMS: &[&str] = &["cccma_canrcm4"];

    pub const ENSEMBLE_MEMBERS: &[&str] = &["r1i1p1"];

    pub const VARIABLES: &[&str] = &[
        "2m_air_temperature",
        "2m_surface_specific_humidity",
        "10m_u_component_of_the_wind",
        "10m_v_component_of_the_wind",
        "10m_wind_speed",
        "maximum_2m_temperature_in_the_last_24_hours",
        "minimum_2m_temperature_in_the_last_24_hours",
        "evaporation",
        "mean_sea_level_pressure",
        "mean_precipitation_flux",
        "surface_pressure",
        "surface_solar_radiation_downwards",
        "surface_thermal_radiation_downward",
        "total_cloud_cover",
    ];

    pub const DEFAULT_HORIZONTAL_RESOLUTION: &str = "0_22_degree_x_0_22_degree";
}

pub mod atlas {
    pub const DATASET: &str = "multi-origin-c3s-atlas";

    pub const ORIGINS: &[&str] = &["cordex_core", "cordex_eur_11"];

    pub const EXPERIMENTS: &[&str] = &["historical", "rcp_2_6", "rcp_8_5"];

    // More are available upstream.
    pub const VARIABLES: &[&str] = &[
        "monthly_mean_of_daily_accumulated_precipitation",
        "monthly_mean_of_daily_mean_temperature",
        "monthly_surface_solar_radiation_downwards",
        "monthly_mean_of_daily_minimum_temperature",
        "monthly_mean_of_daily_maximum_temperature",
        "monthly_surface_thermal_radiation_downwards",
        "monthly_near_surface_specific_humidity",
    ];

    pub const HISTORICAL_PERIOD: &str = "1970-2005";
    pub const PROJECTION_PERIOD: &str = "2006-2100";
}

pub mod era5 {
    pub const DATASET: &str = "reanalysis-era5-land-monthly-means";

    // monthly_averaged_reanalysis_by_hour_of_day is not supported.
    pub const PRODUCT_TYPES: &[&str] = &["monthly_averaged_reanalysis"];

    pub const EARLIEST_YEAR: i32 = 1950;
    /// Last complete year; the current year is partially available upstream.
    pub const LATEST_YEAR: i32 = 2024;

    pub const MONTHS: [&str; 12] = [
        "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12",
    ];

    pub const TIMES: [&str; 1] = ["00:00"];

    pub const VARIABLES: &[&str] = &[
        "2m_dewpoint_temperature",
        "2m_temperature",
        "skin_temperature",
        "soil_temperature_level_1",
        "soil_temperature_level_2",
        "soil_temperature_level_3",
        "soil_temperature_level_4",
        "lake_bottom_temperature",
        "lake_ice_depth",
        "lake_ice_temperature",
        "lake_mix_layer_depth",
        "lake_mix_layer_temperature",
        "lake_shape_factor",
        "lake_total_layer_temperature",
        "snow_albedo",
        "snow_cover",
        "snow_density",
        "snow_depth",
        "snow_depth_water_equivalent",
        "snowfall",
        "snowmelt",
        "temperature_of_snow_layer",
        "skin_reservoir_content",
        "volumetric_soil_water_layer_1",
        "volumetric_soil_water_layer_2",
        "volumetric_soil_water_layer_3",
        "volumetric_soil_water_layer_4",
        "forecast_albedo",
        "surface_latent_heat_flux",
        "surface_net_solar_radiation",
        "surface_net_thermal_radiation",
        "surface_sensible_heat_flux",
        "surface_solar_radiation_downwards",
        "surface_thermal_radiation_downwards",
        "evaporation_from_bare_soil",
        "evaporation_from_open_water_surfaces_excluding_oceans",
        "evaporation_from_the_top_of_canopy",
        "evaporation_from_vegetation_transpiration",
        "potential_evaporation",
        "runoff",
        "snow_evaporation",
        "sub_surface_runoff",
        "surface_runoff",
        "total_evaporation",
        "10m_u_component_of_wind",
        "10m_v_component_of_wind",
        "surface_pressure",
        "total_precipitation",
        "leaf_area_index_high_vegetation",
        "leaf_area_index_low_vegetation",
        "high_vegetation_cover",
        "glacier_mask",
        "lake_cover",
        "low_vegetation_cover",
        "lake_total_depth",
        "geopotential",
        "land_sea_mask",
        "soil_type",
        "type_of_high_vegetation",
        "type_of_low_vegetation",
    ];
}

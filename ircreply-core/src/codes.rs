//! Reply code constants for every built-in reply.

use crate::schema::ReplyCode;

pub const RPL_WELCOME: ReplyCode = 1;
pub const RPL_YOURHOST: ReplyCode = 2;
pub const RPL_CREATED: ReplyCode = 3;
pub const RPL_MYINFO: ReplyCode = 4;
pub const RPL_ISUPPORT: ReplyCode = 5;
pub const RPL_REMOTEISUPPORT: ReplyCode = 105;
pub const RPL_BOUNCE: ReplyCode = 10;
pub const RPL_STATSCOMMANDS: ReplyCode = 212;
pub const RPL_ENDOFSTATS: ReplyCode = 219;
pub const RPL_UMODEIS: ReplyCode = 221;
pub const RPL_STATSUPTIME: ReplyCode = 242;
pub const RPL_LUSERCLIENT: ReplyCode = 251;
pub const RPL_LUSEROP: ReplyCode = 252;
pub const RPL_LUSERUNKNOWN: ReplyCode = 253;
pub const RPL_LUSERCHANNELS: ReplyCode = 254;
pub const RPL_LUSERME: ReplyCode = 255;
pub const RPL_ADMINME: ReplyCode = 256;
pub const RPL_ADMINLOC1: ReplyCode = 257;
pub const RPL_ADMINLOC2: ReplyCode = 258;
pub const RPL_ADMINEMAIL: ReplyCode = 259;
pub const RPL_TRYAGAIN: ReplyCode = 263;
pub const RPL_LOCALUSERS: ReplyCode = 265;
pub const RPL_GLOBALUSERS: ReplyCode = 266;
pub const RPL_WHOISCERTFP: ReplyCode = 276;
pub const RPL_NONE: ReplyCode = 300;
pub const RPL_AWAY: ReplyCode = 301;
pub const RPL_USERHOST: ReplyCode = 302;
pub const RPL_UNAWAY: ReplyCode = 305;
pub const RPL_NOWAWAY: ReplyCode = 306;
pub const RPL_WHOISREGNICK: ReplyCode = 307;
pub const RPL_WHOISUSER: ReplyCode = 311;
pub const RPL_WHOISSERVER: ReplyCode = 312;
pub const RPL_WHOISOPERATOR: ReplyCode = 313;
pub const RPL_WHOWASUSER: ReplyCode = 314;
pub const RPL_ENDOFWHO: ReplyCode = 315;
pub const RPL_WHOISIDLE: ReplyCode = 317;
pub const RPL_ENDOFWHOIS: ReplyCode = 318;
pub const RPL_WHOISCHANNELS: ReplyCode = 319;
pub const RPL_WHOISSPECIAL: ReplyCode = 320;
pub const RPL_LISTSTART: ReplyCode = 321;
pub const RPL_LIST: ReplyCode = 322;
pub const RPL_LISTEND: ReplyCode = 323;
pub const RPL_CHANNELMODEIS: ReplyCode = 324;
pub const RPL_CREATIONTIME: ReplyCode = 329;
pub const RPL_WHOISACCOUNT: ReplyCode = 330;
pub const RPL_NOTOPIC: ReplyCode = 331;
pub const RPL_TOPIC: ReplyCode = 332;
pub const RPL_TOPICWHOTIME: ReplyCode = 333;
pub const RPL_INVITELIST: ReplyCode = 336;
pub const RPL_ENDOFINVITELIST: ReplyCode = 337;
pub const RPL_WHOISACTUALLY: ReplyCode = 338;
pub const RPL_INVITING: ReplyCode = 341;
pub const RPL_INVEXLIST: ReplyCode = 346;
pub const RPL_ENDOFINVEXLIST: ReplyCode = 347;
pub const RPL_EXCEPTLIST: ReplyCode = 348;
pub const RPL_ENDOFEXCEPTLIST: ReplyCode = 349;
pub const RPL_VERSION: ReplyCode = 351;
pub const RPL_WHOREPLY: ReplyCode = 352;
pub const RPL_NAMREPLY: ReplyCode = 353;
pub const RPL_LINKS: ReplyCode = 364;
pub const RPL_ENDOFLINKS: ReplyCode = 365;
pub const RPL_ENDOFNAMES: ReplyCode = 366;
pub const RPL_BANLIST: ReplyCode = 367;
pub const RPL_ENDOFBANLIST: ReplyCode = 368;
pub const RPL_ENDOFWHOWAS: ReplyCode = 369;
pub const RPL_INFO: ReplyCode = 371;
pub const RPL_MOTD: ReplyCode = 372;
pub const RPL_ENDOFINFO: ReplyCode = 374;
pub const RPL_MOTDSTART: ReplyCode = 375;
pub const RPL_ENDOFMOTD: ReplyCode = 376;
pub const RPL_WHOISHOST: ReplyCode = 378;
pub const RPL_WHOISMODES: ReplyCode = 379;
pub const RPL_YOUREOPER: ReplyCode = 381;
pub const RPL_REHASHING: ReplyCode = 382;
pub const RPL_TIME: ReplyCode = 391;
pub const ERR_UNKNOWNERROR: ReplyCode = 400;
pub const ERR_NOSUCHNICK: ReplyCode = 401;
pub const ERR_NOSUCHSERVER: ReplyCode = 402;
pub const ERR_NOSUCHCHANNEL: ReplyCode = 403;
pub const ERR_CANNOTSENDTOCHAN: ReplyCode = 404;
pub const ERR_TOOMANYCHANNELS: ReplyCode = 405;
pub const ERR_WASNOSUCHNICK: ReplyCode = 406;
pub const ERR_NOORIGIN: ReplyCode = 409;
pub const ERR_NORECIPIENT: ReplyCode = 411;
pub const ERR_NOTEXTTOSEND: ReplyCode = 412;
pub const ERR_INPUTTOOLONG: ReplyCode = 417;
pub const ERR_UNKNOWNCOMMAND: ReplyCode = 421;
pub const ERR_NOMOTD: ReplyCode = 422;
pub const ERR_NONICKNAMEGIVEN: ReplyCode = 431;
pub const ERR_ERRONEUSNICKNAME: ReplyCode = 432;
pub const ERR_NICKNAMEINUSE: ReplyCode = 433;
pub const ERR_NICKCOLLISION: ReplyCode = 436;
pub const ERR_USERNOTINCHANNEL: ReplyCode = 441;
pub const ERR_NOTONCHANNEL: ReplyCode = 442;
pub const ERR_USERONCHANNEL: ReplyCode = 443;
pub const ERR_NOTREGISTERED: ReplyCode = 451;
pub const ERR_NEEDMOREPARAMS: ReplyCode = 461;
pub const ERR_ALREADYREGISTERED: ReplyCode = 462;
pub const ERR_PASSWDMISMATCH: ReplyCode = 464;
pub const ERR_YOUREBANNEDCREEP: ReplyCode = 465;
pub const ERR_CHANNELISFULL: ReplyCode = 471;
pub const ERR_UNKNOWNMODE: ReplyCode = 472;
pub const ERR_INVITEONLYCHAN: ReplyCode = 473;
pub const ERR_BANNEDFROMCHAN: ReplyCode = 474;
pub const ERR_BADCHANNELKEY: ReplyCode = 475;
pub const ERR_BADCHANMASK: ReplyCode = 476;
pub const ERR_NOPRIVILEGES: ReplyCode = 481;
pub const ERR_CHANOPRIVSNEEDED: ReplyCode = 482;
pub const ERR_CANTKILLSERVER: ReplyCode = 483;
pub const ERR_NOOPERHOST: ReplyCode = 491;
pub const ERR_UMODEUNKNOWNFLAG: ReplyCode = 501;
pub const ERR_USERSDONTMATCH: ReplyCode = 502;
pub const ERR_HELPNOTFOUND: ReplyCode = 524;
pub const ERR_INVALIDKEY: ReplyCode = 525;
pub const RPL_STARTTLS: ReplyCode = 670;
pub const RPL_WHOISSECURE: ReplyCode = 671;
pub const ERR_STARTTLSERROR: ReplyCode = 691;
pub const ERR_INVALIDMODEPARAM: ReplyCode = 696;
pub const RPL_HELPSTART: ReplyCode = 704;
pub const RPL_HELPTXT: ReplyCode = 705;
pub const RPL_ENDOFHELP: ReplyCode = 706;
pub const ERR_NOPRIVS: ReplyCode = 723;
pub const RPL_LOGGEDIN: ReplyCode = 900;
pub const RPL_LOGGEDOUT: ReplyCode = 901;
pub const ERR_NICKLOCKED: ReplyCode = 902;
pub const RPL_SASLSUCCESS: ReplyCode = 903;
pub const ERR_SASLFAIL: ReplyCode = 904;
pub const ERR_SASLTOOLONG: ReplyCode = 905;
pub const ERR_SASLABORTED: ReplyCode = 906;
pub const ERR_SASLALREADY: ReplyCode = 907;
pub const RPL_SASLMECHS: ReplyCode = 908;
